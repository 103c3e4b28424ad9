use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use soar_core::{AlertId, CaseId, CasePriority, CloseReason};
use tracing::instrument;

use crate::{Error, SoarClient, endpoints};

/// A case together with its alerts and comments.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CaseFullDetails {
    pub case_details: Value,
    pub case_alerts: Value,
    pub case_comments: Value,
}

/// A manually created case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewCase {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CasePriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

impl NewCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: None,
            description: None,
            environment: None,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: CasePriority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }
}

/// The final determination recorded when a case is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CaseClosure {
    pub root_cause: String,
    pub comment: String,
    pub reason: CloseReason,
    /// Comma-separated tags applied on close.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CloseCaseBody<'a> {
    case_id: &'a str,
    #[serde(flatten)]
    closure: &'a CaseClosure,
}

impl SoarClient {
    /// Create a manual case.
    #[instrument(skip(self, case), fields(name = %case.name))]
    pub async fn create_case(&self, case: &NewCase) -> Result<Value, Error> {
        let req = self.client.post(self.url(endpoints::CASES)).json(case);
        self.send_json(req).await
    }

    /// List cases, newest first. Pass the token from a previous page to
    /// continue.
    #[instrument(skip(self))]
    pub async fn list_cases(&self, next_page_token: Option<&str>) -> Result<Value, Error> {
        let mut req = self.client.get(self.url(endpoints::CASES));
        if let Some(token) = next_page_token {
            req = req.query(&[("$expand", "tags"), ("pageToken", token)]);
        }
        self.send_json(req).await
    }

    /// Add a comment to a case.
    #[instrument(skip(self, comment))]
    pub async fn post_case_comment(&self, case_id: &CaseId, comment: &str) -> Result<Value, Error> {
        let req = self
            .client
            .post(self.url(&endpoints::case_comments(case_id)))
            .json(&json!({ "Comment": comment }));
        self.send_json(req).await
    }

    /// List the alerts grouped under a case.
    #[instrument(skip(self))]
    pub async fn list_alerts_by_case(
        &self,
        case_id: &CaseId,
        next_page_token: Option<&str>,
    ) -> Result<Value, Error> {
        let mut req = self.client.get(self.url(&endpoints::case_alerts(case_id)));
        if let Some(token) = next_page_token {
            req = req.query(&[("pageToken", token)]);
        }
        self.send_json(req).await
    }

    /// List only the alert-group identifiers of a case's alerts.
    #[instrument(skip(self))]
    pub async fn list_alert_group_identifiers_by_case(
        &self,
        case_id: &CaseId,
        next_page_token: Option<&str>,
    ) -> Result<Value, Error> {
        let mut req = self
            .client
            .get(self.url(&endpoints::case_alert_group_identifiers(case_id)));
        if let Some(token) = next_page_token {
            req = req.query(&[("pageToken", token)]);
        }
        self.send_json(req).await
    }

    #[instrument(skip(self))]
    pub async fn change_case_priority(
        &self,
        case_id: &CaseId,
        priority: CasePriority,
    ) -> Result<Value, Error> {
        let req = self
            .client
            .patch(self.url(&endpoints::case(case_id)))
            .json(&json!({ "Priority": priority }));
        self.send_json(req).await
    }

    /// List the events behind one alert of a case.
    #[instrument(skip(self))]
    pub async fn list_events_by_alert(
        &self,
        case_id: &CaseId,
        alert_id: &AlertId,
        next_page_token: Option<&str>,
    ) -> Result<Value, Error> {
        let mut req = self
            .client
            .get(self.url(&endpoints::alert_involved_events(case_id, alert_id)));
        if let Some(token) = next_page_token {
            req = req.query(&[("pageToken", token)]);
        }
        self.send_json(req).await
    }

    /// Replace a case's description.
    #[instrument(skip(self, description))]
    pub async fn update_case_description(
        &self,
        case_id: &CaseId,
        description: &str,
    ) -> Result<Value, Error> {
        let req = self
            .client
            .post(self.url(endpoints::CHANGE_CASE_DESCRIPTION))
            .json(&json!({ "CaseId": case_id, "Description": description }));
        self.send_json(req).await
    }

    #[instrument(skip(self, closure), fields(reason = %closure.reason))]
    pub async fn close_case(&self, case_id: &CaseId, closure: &CaseClosure) -> Result<Value, Error> {
        let body = CloseCaseBody {
            case_id: case_id.as_str(),
            closure,
        };
        let req = self.client.post(self.url(endpoints::CLOSE_CASE)).json(&body);
        self.send_json(req).await
    }

    /// Assign a user (name or email) to a case.
    #[instrument(skip(self))]
    pub async fn assign_case(&self, case_id: &CaseId, user: &str) -> Result<Value, Error> {
        let req = self
            .client
            .post(self.url(endpoints::ASSIGN_USER_TO_CASE))
            .json(&json!({ "CaseId": case_id, "User": user }));
        self.send_json(req).await
    }

    /// Move a case to another stage. Stage names are deployment-specific.
    #[instrument(skip(self))]
    pub async fn change_case_stage(&self, case_id: &CaseId, stage: &str) -> Result<Value, Error> {
        let req = self
            .client
            .post(self.url(endpoints::CHANGE_CASE_STAGE))
            .json(&json!({ "CaseId": case_id, "Stage": stage }));
        self.send_json(req).await
    }

    #[instrument(skip(self))]
    pub async fn add_case_tag(&self, case_id: &CaseId, tag: &str) -> Result<Value, Error> {
        let req = self
            .client
            .post(self.url(endpoints::ADD_CASE_TAG))
            .json(&json!({ "CaseId": case_id, "Tag": tag }));
        self.send_json(req).await
    }

    #[instrument(skip(self))]
    pub async fn remove_case_tag(&self, case_id: &CaseId, tag: &str) -> Result<Value, Error> {
        let req = self
            .client
            .post(self.url(endpoints::REMOVE_CASE_TAG))
            .json(&json!({ "CaseId": case_id, "Tag": tag }));
        self.send_json(req).await
    }

    /// Fetch a case, its alerts and its comments concurrently.
    ///
    /// Fails if any of the three calls fails.
    #[instrument(skip(self))]
    pub async fn get_case_full_details(&self, case_id: &CaseId) -> Result<CaseFullDetails, Error> {
        let details = self.send_json::<Value>(self.client.get(self.url(&endpoints::case(case_id))));
        let alerts = self.send_json::<Value>(
            self.client.get(self.url(&endpoints::case_alerts(case_id))),
        );
        let comments = self.send_json::<Value>(
            self.client.get(self.url(&endpoints::case_comments(case_id))),
        );

        let (case_details, case_alerts, case_comments) =
            tokio::try_join!(details, alerts, comments)?;

        Ok(CaseFullDetails {
            case_details,
            case_alerts,
            case_comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::mock::MockServer;

    fn client_for(server: &MockServer) -> SoarClient {
        SoarClient::builder(&server.base_url).build().unwrap()
    }

    #[tokio::test]
    async fn list_cases_without_token_has_no_query() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, r#"{"cases":[]}"#.into())]);

        let response = client.list_cases(None).await.unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(response, json!({"cases": []}));
        assert_eq!(requests[0].target, "/api/1p/external/v1/cases");
    }

    #[tokio::test]
    async fn list_cases_with_token_expands_tags() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, "{}".into())]);

        client.list_cases(Some("page-2")).await.unwrap();
        let requests = handle.await.unwrap();

        let target = &requests[0].target;
        assert!(target.starts_with("/api/1p/external/v1/cases?"));
        assert!(target.contains("expand=tags"));
        assert!(target.contains("pageToken=page-2"));
    }

    #[tokio::test]
    async fn post_comment_body() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, r#"{"id":1}"#.into())]);

        client
            .post_case_comment(&CaseId::new("42"), "looked at it")
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].target, "/api/1p/external/v1/cases/42/comments");
        assert_eq!(requests[0].json(), json!({"Comment": "looked at it"}));
    }

    #[tokio::test]
    async fn alert_group_identifiers_keep_select_with_token() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, "{}".into())]);

        client
            .list_alert_group_identifiers_by_case(&CaseId::new("7"), Some("t1"))
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(
            requests[0].target,
            "/api/1p/external/v1.0/cases/7/caseAlerts?$select=alertGroupIdentifier&pageToken=t1"
        );
    }

    #[tokio::test]
    async fn alerts_by_case_path() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, "[]".into())]);

        client
            .list_alerts_by_case(&CaseId::new("7"), None)
            .await
            .unwrap();
        let requests = handle.await.unwrap();
        assert_eq!(requests[0].target, "/api/1p/external/v1.0/cases/7/caseAlerts");
    }

    #[tokio::test]
    async fn change_priority_patches_case() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, "{}".into())]);

        client
            .change_case_priority(&CaseId::new("42"), CasePriority::PriorityHigh)
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(requests[0].target, "/api/1p/external/v1/cases/42");
        assert_eq!(requests[0].json(), json!({"Priority": "PriorityHigh"}));
    }

    #[tokio::test]
    async fn full_details_gathers_three_calls() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve_with(3, |request| {
            let body = if request.target.ends_with("/comments") {
                r#"{"kind":"comments"}"#
            } else if request.target.ends_with("/caseAlerts") {
                r#"{"kind":"alerts"}"#
            } else {
                r#"{"kind":"case"}"#
            };
            (200, body.to_owned())
        });

        let details = client
            .get_case_full_details(&CaseId::new("9"))
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(requests.len(), 3);
        assert_eq!(details.case_details["kind"], "case");
        assert_eq!(details.case_alerts["kind"], "alerts");
        assert_eq!(details.case_comments["kind"], "comments");
    }

    #[tokio::test]
    async fn create_case_omits_unset_fields() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, r#"{"id":77}"#.into())]);

        let case = NewCase::new("Suspicious logins").with_priority(CasePriority::PriorityMedium);
        let response = client.create_case(&case).await.unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(response["id"], 77);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].target, "/api/1p/external/v1/cases");
        assert_eq!(
            requests[0].json(),
            json!({"Name": "Suspicious logins", "Priority": "PriorityMedium"})
        );
    }

    #[tokio::test]
    async fn events_by_alert_uses_alerts_path() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, "{}".into())]);

        client
            .list_events_by_alert(&CaseId::new("523"), &AlertId::new("751"), Some("p2"))
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(
            requests[0].target,
            "/api/1p/external/v1.0/cases/523/alerts/751/involvedEvents?pageToken=p2"
        );
    }

    #[tokio::test]
    async fn close_case_body() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![(200, "true".into())]);

        let closure = CaseClosure {
            root_cause: "Phishing".into(),
            comment: "Credentials reset.".into(),
            reason: CloseReason::Malicious,
            tags: None,
        };
        let response = client
            .close_case(&CaseId::new("523"), &closure)
            .await
            .unwrap();
        let requests = handle.await.unwrap();

        assert_eq!(response, json!(true));
        assert_eq!(requests[0].target, "/api/external/v1/cases/CloseCase");
        assert_eq!(
            requests[0].json(),
            json!({
                "CaseId": "523",
                "RootCause": "Phishing",
                "Comment": "Credentials reset.",
                "Reason": "Malicious"
            })
        );
    }

    #[tokio::test]
    async fn case_update_bodies() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let handle = server.serve(vec![
            (200, "{}".into()),
            (200, "{}".into()),
            (200, "{}".into()),
            (200, "{}".into()),
            (200, "{}".into()),
        ]);
        let case_id = CaseId::new("9");

        client
            .update_case_description(&case_id, "Confirmed phishing.")
            .await
            .unwrap();
        client.assign_case(&case_id, "analyst@example.com").await.unwrap();
        client.change_case_stage(&case_id, "Triage").await.unwrap();
        client.add_case_tag(&case_id, "phishing").await.unwrap();
        client.remove_case_tag(&case_id, "phishing").await.unwrap();
        let requests = handle.await.unwrap();

        let seen: Vec<(&str, Value)> = requests
            .iter()
            .map(|r| (r.target.as_str(), r.json()))
            .collect();
        assert_eq!(
            seen,
            vec![
                (
                    "/api/external/v1/cases/ChangeCaseDescription",
                    json!({"CaseId": "9", "Description": "Confirmed phishing."})
                ),
                (
                    "/api/external/v1/cases/AssignUserToCase",
                    json!({"CaseId": "9", "User": "analyst@example.com"})
                ),
                (
                    "/api/external/v1/cases/ChangeCaseStage",
                    json!({"CaseId": "9", "Stage": "Triage"})
                ),
                (
                    "/api/external/v1/cases/AddCaseTag",
                    json!({"CaseId": "9", "Tag": "phishing"})
                ),
                (
                    "/api/external/v1/cases/RemoveCaseTag",
                    json!({"CaseId": "9", "Tag": "phishing"})
                ),
            ]
        );
        assert!(requests.iter().all(|r| r.method == "POST"));
    }
}
