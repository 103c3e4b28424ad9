//! SOAR external API paths.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped when a value is used as a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const GET_SCOPES: &str = "/api/external/v1/settings/GetScopes";
pub const EXECUTE_MANUAL_ACTION: &str = "/api/external/v1/cases/ExecuteManualAction";
pub const CASES: &str = "/api/1p/external/v1/cases";

pub const CHANGE_CASE_DESCRIPTION: &str = "/api/external/v1/cases/ChangeCaseDescription";
pub const CLOSE_CASE: &str = "/api/external/v1/cases/CloseCase";
pub const ASSIGN_USER_TO_CASE: &str = "/api/external/v1/cases/AssignUserToCase";
pub const CHANGE_CASE_STAGE: &str = "/api/external/v1/cases/ChangeCaseStage";
pub const ADD_CASE_TAG: &str = "/api/external/v1/cases/AddCaseTag";
pub const REMOVE_CASE_TAG: &str = "/api/external/v1/cases/RemoveCaseTag";

pub const ALERT_GROUP_ENTITIES: &str = "/api/external/v1/case-overview/GetAlertsEntities";
pub const ENTITY_DATA: &str = "/api/external/v1/entities/GetEntityData";
pub const ENTITY_SEARCH: &str = "/api/external/v1.0/entity-search/entities";

fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Instances configured for an integration, selecting only their identifiers.
pub fn integration_instances(integration: &str) -> String {
    format!(
        "/api/1p/external/v1/integrations/{}/integrationInstances?$select=identifier",
        segment(integration)
    )
}

pub fn case(case_id: &str) -> String {
    format!("{CASES}/{}", segment(case_id))
}

pub fn case_comments(case_id: &str) -> String {
    format!("{}/comments", case(case_id))
}

pub fn case_alerts(case_id: &str) -> String {
    format!("/api/1p/external/v1.0/cases/{}/caseAlerts", segment(case_id))
}

pub fn case_alert_group_identifiers(case_id: &str) -> String {
    format!("{}?$select=alertGroupIdentifier", case_alerts(case_id))
}

/// Events behind one alert. The backend serves these under `alerts`, not
/// `caseAlerts`.
pub fn alert_involved_events(case_id: &str, alert_id: &str) -> String {
    format!(
        "/api/1p/external/v1.0/cases/{}/alerts/{}/involvedEvents",
        segment(case_id),
        segment(alert_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_name_is_escaped() {
        assert_eq!(
            integration_instances("CiscoAMP"),
            "/api/1p/external/v1/integrations/CiscoAMP/integrationInstances?$select=identifier"
        );
        assert_eq!(
            integration_instances("Google Chat/v2"),
            "/api/1p/external/v1/integrations/Google%20Chat%2Fv2/integrationInstances?$select=identifier"
        );
    }

    #[test]
    fn case_paths() {
        assert_eq!(case("42"), "/api/1p/external/v1/cases/42");
        assert_eq!(case_comments("42"), "/api/1p/external/v1/cases/42/comments");
        assert_eq!(
            case_alert_group_identifiers("42"),
            "/api/1p/external/v1.0/cases/42/caseAlerts?$select=alertGroupIdentifier"
        );
    }

    #[test]
    fn involved_events_path() {
        assert_eq!(
            alert_involved_events("523", "751"),
            "/api/1p/external/v1.0/cases/523/alerts/751/involvedEvents"
        );
    }
}
