// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! GitHub REST API access for profile statistics and language usage.
//!
//! Every endpoint is requested once. Failures are reported as [`AppError`]
//! so the caller can decide whether to fall back to defaults.

use masterror::AppError;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::profile::{Languages, Stats};

const PER_PAGE: u8 = 100;
const MAX_PAGES: u32 = 10;

/// Source of the data summarized by the cards.
///
/// [`GitHubClient`] is the production implementation; tests substitute
/// in-memory sources.
pub trait ProfileSource
{
    /// Fetches aggregate activity counters for `username`.
    fn fetch_stats(&self, username: &str,) -> impl Future<Output = Result<Stats, AppError,>,>;

    /// Fetches byte counts per language across the repositories of
    /// `username`.
    fn fetch_languages(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Languages, AppError,>,>;
}

/// Octocrab-backed [`ProfileSource`].
#[derive(Debug, Clone,)]
pub struct GitHubClient
{
    octocrab: Octocrab,
}

#[derive(Debug, Deserialize,)]
struct UserProfile
{
    #[serde(default)]
    public_repos: u64,
}

#[derive(Debug, Clone, Deserialize,)]
struct RepositorySummary
{
    name:             String,
    #[serde(default)]
    fork:             bool,
    #[serde(default)]
    stargazers_count: u64,
}

#[derive(Debug, Deserialize,)]
struct SearchCount
{
    total_count: u64,
}

#[derive(Debug, Serialize,)]
struct RepositoryQuery
{
    #[serde(rename = "type")]
    kind:     &'static str,
    per_page: u8,
    page:     u32,
}

#[derive(Debug, Serialize,)]
struct SearchQuery
{
    q:        String,
    per_page: u8,
}

impl GitHubClient
{
    /// Builds a client for the public GitHub API.
    ///
    /// Requests are anonymous when `token` is `None`, which works but is
    /// subject to much lower rate limits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the underlying HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use galaxy_profile::{GitHubClient, ProfileSource};
    ///
    /// # async fn example() -> Result<(), masterror::AppError> {
    /// let client = GitHubClient::new(None,)?;
    /// let stats = client.fetch_stats("octocat",).await?;
    /// println!("{stats}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(token: Option<&str,>,) -> Result<Self, AppError,>
    {
        Self::build(None, token,)
    }

    /// Builds a client against another API root, such as GitHub Enterprise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when `base_uri` is not a valid URI or the HTTP
    /// client cannot be built.
    pub fn with_base_uri(base_uri: &str, token: Option<&str,>,) -> Result<Self, AppError,>
    {
        Self::build(Some(base_uri,), token,)
    }

    fn build(base_uri: Option<&str,>, token: Option<&str,>,) -> Result<Self, AppError,>
    {
        let mut builder = Octocrab::builder();
        if let Some(token,) = token.map(str::trim,).filter(|value| !value.is_empty(),) {
            builder = builder.personal_token(token,);
        }
        if let Some(uri,) = base_uri {
            builder = builder
                .base_uri(uri,)
                .map_err(|e| AppError::validation(format!("invalid GitHub API URL '{uri}': {e}"),),)?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| AppError::service(format!("failed to initialize GitHub client: {e}"),),)?;

        Ok(Self {
            octocrab,
        },)
    }

    async fn get_json<P,>(&self, route: &str, parameters: Option<&P,>,) -> Result<Value, AppError,>
    where
        P: Serialize + ?Sized,
    {
        debug!("GET {}", route);
        self.octocrab
            .get(route, parameters,)
            .await
            .map_err(|e| AppError::service(format!("request to {route} failed: {e}"),),)
    }

    async fn fetch_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<RepositorySummary,>, AppError,>
    {
        let route = format!("/users/{username}/repos");
        let mut repositories = Vec::with_capacity(usize::from(PER_PAGE,),);

        for page in 1..=MAX_PAGES {
            let query = RepositoryQuery {
                kind: "owner", per_page: PER_PAGE, page,
            };
            let value = self.get_json(&route, Some(&query,),).await?;
            let batch: Vec<RepositorySummary,> = decode(&route, value,)?;
            let received = batch.len();
            repositories.extend(batch,);

            if received < usize::from(PER_PAGE,) {
                break;
            }
        }

        debug!("Found {} repositories for {}", repositories.len(), username);

        Ok(repositories,)
    }

    async fn search_count(&self, route: &str, query: String,) -> Result<u64, AppError,>
    {
        let parameters = SearchQuery {
            q: query, per_page: 1,
        };
        let value = self.get_json(route, Some(&parameters,),).await?;
        let count: SearchCount = decode(route, value,)?;
        Ok(count.total_count,)
    }
}

impl ProfileSource for GitHubClient
{
    async fn fetch_stats(&self, username: &str,) -> Result<Stats, AppError,>
    {
        let user_route = format!("/users/{username}");
        let user: UserProfile =
            decode(&user_route, self.get_json(&user_route, None::<&(),>,).await?,)?;

        let repositories = self.fetch_repositories(username,).await?;

        let commits = self.search_count("/search/commits", format!("author:{username}"),).await?;
        let prs =
            self.search_count("/search/issues", format!("author:{username} type:pr"),).await?;
        let issues =
            self.search_count("/search/issues", format!("author:{username} type:issue"),).await?;

        Ok(Stats {
            commits,
            stars: total_stars(&repositories,),
            prs,
            issues,
            repos: user.public_repos,
        },)
    }

    async fn fetch_languages(&self, username: &str,) -> Result<Languages, AppError,>
    {
        let repositories = self.fetch_repositories(username,).await?;
        let mut languages = Languages::new();

        for repository in repositories.iter().filter(|repository| !repository.fork,) {
            let route = format!("/repos/{username}/{}/languages", repository.name);
            let value = self.get_json(&route, None::<&(),>,).await?;
            let breakdown: Languages = decode(&route, value,)?;
            merge_languages(&mut languages, breakdown,);
        }

        Ok(languages,)
    }
}

fn decode<T,>(route: &str, value: Value,) -> Result<T, AppError,>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value,)
        .map_err(|e| AppError::service(format!("unexpected response from {route}: {e}"),),)
}

fn total_stars(repositories: &[RepositorySummary],) -> u64
{
    repositories
        .iter()
        .filter(|repository| !repository.fork,)
        .fold(0u64, |total, repository| total.saturating_add(repository.stargazers_count,),)
}

fn merge_languages(total: &mut Languages, breakdown: Languages,)
{
    for (language, bytes,) in breakdown {
        let entry = total.entry(language,).or_insert(0,);
        *entry = entry.saturating_add(bytes,);
    }
}

#[cfg(test)]
mod tests
{
    use serde_json::json;

    use super::*;

    fn repository(name: &str, fork: bool, stars: u64,) -> RepositorySummary
    {
        RepositorySummary {
            name: name.to_owned(), fork, stargazers_count: stars,
        }
    }

    #[test]
    fn total_stars_skips_forks()
    {
        let repositories = [
            repository("alpha", false, 10,),
            repository("beta", true, 500,),
            repository("gamma", false, 5,),
        ];

        assert_eq!(total_stars(&repositories,), 15);
    }

    #[test]
    fn merge_languages_sums_byte_counts()
    {
        let mut total = Languages::new();
        merge_languages(
            &mut total,
            Languages::from([("Rust".to_owned(), 100,), ("Python".to_owned(), 20,),],),
        );
        merge_languages(
            &mut total,
            Languages::from([("Rust".to_owned(), 50,), ("Go".to_owned(), 7,),],),
        );

        assert_eq!(total.get("Rust"), Some(&150));
        assert_eq!(total.get("Python"), Some(&20));
        assert_eq!(total.get("Go"), Some(&7));
    }

    #[test]
    fn decode_accepts_repository_listing()
    {
        let value = json!([
            { "name": "hello-world", "fork": false, "stargazers_count": 42, "extra": "ignored" },
            { "name": "forked", "fork": true }
        ]);

        let repositories: Vec<RepositorySummary,> =
            decode("/users/octocat/repos", value,).expect("listing should decode",);

        assert_eq!(repositories.len(), 2);
        assert_eq!(repositories[0].stargazers_count, 42);
        assert_eq!(repositories[1].stargazers_count, 0);
    }

    #[test]
    fn decode_reports_malformed_response()
    {
        let value = json!({ "message": "API rate limit exceeded" });

        let error = decode::<SearchCount,>("/search/commits", value,)
            .expect_err("missing total_count should fail",);

        let message = format!("{error:?}");
        assert!(message.contains("/search/commits"), "{message}");
    }

    #[test]
    fn decode_rejects_non_numeric_language_weights()
    {
        let value = json!({ "Rust": "lots" });
        assert!(decode::<Languages,>("/repos/octocat/x/languages", value,).is_err());
    }

    #[test]
    fn repository_query_serializes_type_field()
    {
        let query = RepositoryQuery {
            kind: "owner", per_page: PER_PAGE, page: 2,
        };
        let json = serde_json::to_value(&query,).expect("serialization failed",);
        assert_eq!(json["type"], "owner");
        assert_eq!(json["page"], 2);
    }

    #[tokio::test]
    async fn client_rejects_invalid_base_uri()
    {
        assert!(GitHubClient::with_base_uri("not a uri", None,).is_err());
    }

    #[tokio::test]
    async fn unreachable_api_yields_service_errors()
    {
        let client = GitHubClient::with_base_uri("http://127.0.0.1:9", None,)
            .expect("client should build",);

        assert!(client.fetch_stats("octocat",).await.is_err());
        assert!(client.fetch_languages("octocat",).await.is_err());
    }
}
