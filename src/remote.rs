//! Blocking HTTP client for the remote group service.
//!
//! The core never depends on this module: callers fetch through it and fall
//! back to the local caches (`db::cache`) on any failure, so a dead or slow
//! server never blocks local event creation or day-view rendering.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::member::{Group, Member};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

/// Wire shapes served by the group service (integer ids).
#[derive(Debug, Deserialize)]
struct ApiMember {
    id: i64,
    username: String,
    full_name: Option<String>,
    color: String,
}

#[derive(Debug, Deserialize)]
struct ApiGroup {
    id: i64,
    name: String,
    owner_id: i64,
}

#[derive(Debug, Deserialize)]
struct ApiToken {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    detail: Option<String>,
}

impl From<ApiMember> for Member {
    fn from(m: ApiMember) -> Self {
        Member {
            id: m.id.to_string(),
            username: m.username,
            full_name: m.full_name,
            color: m.color,
        }
    }
}

impl From<ApiGroup> for Group {
    fn from(g: ApiGroup) -> Self {
        Group {
            id: g.id.to_string(),
            name: g.name,
            owner_id: g.owner_id.to_string(),
        }
    }
}

pub struct RemoteClient {
    base: String,
    token: Option<String>,
    http: Client,
}

impl RemoteClient {
    pub fn new(cfg: &Config, token: Option<String>) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base: cfg.api_base.trim_end_matches('/').to_string(),
            token,
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn bearer(&self, req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    /// Map a non-success response to `AppError::Remote`, preferring the
    /// server-provided `detail` message over the bare status.
    fn check(resp: Response) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<ApiError>()
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        Err(AppError::Remote {
            status: Some(status.as_u16()),
            message,
        })
    }

    /// Obtain a bearer token (OAuth2 password form).
    pub fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let resp = self
            .http
            .post(self.url("/token"))
            .form(&[("username", username), ("password", password)])
            .send()?;
        let token: ApiToken = Self::check(resp)?.json()?;
        Ok(token.access_token)
    }

    /// Own profile, in the same shape as a group member.
    pub fn get_me(&self) -> AppResult<Member> {
        let resp = self.bearer(self.http.get(self.url("/users/me"))).send()?;
        let me: ApiMember = Self::check(resp)?.json()?;
        Ok(me.into())
    }

    pub fn get_my_groups(&self) -> AppResult<Vec<Group>> {
        let resp = self.bearer(self.http.get(self.url("/groups"))).send()?;
        let groups: Vec<ApiGroup> = Self::check(resp)?.json()?;
        Ok(groups.into_iter().map(Into::into).collect())
    }

    pub fn get_group_members(&self, group_id: &str) -> AppResult<Vec<Member>> {
        let resp = self
            .bearer(self.http.get(self.url(&format!("/groups/{}/members", group_id))))
            .send()?;
        let members: Vec<ApiMember> = Self::check(resp)?.json()?;
        Ok(members.into_iter().map(Into::into).collect())
    }

    /// Rename a group. Ownership is enforced server-side; a 403 surfaces
    /// with the server's message.
    pub fn rename_group(&self, group_id: &str, name: &str) -> AppResult<Group> {
        let resp = self
            .bearer(self.http.put(self.url(&format!("/groups/{}", group_id))))
            .json(&serde_json::json!({ "name": name }))
            .send()?;
        let group: ApiGroup = Self::check(resp)?.json()?;
        Ok(group.into())
    }

    pub fn update_my_color(&self, color: &str) -> AppResult<()> {
        let resp = self
            .bearer(self.http.put(self.url("/users/me/color")))
            .json(&serde_json::json!({ "color": color }))
            .send()?;
        Self::check(resp)?;
        Ok(())
    }
}
