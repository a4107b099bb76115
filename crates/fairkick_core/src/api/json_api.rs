//! String-in/string-out JSON entry point.
//!
//! Parses an assignment request, runs boundary validation, invokes the
//! balancer, and serializes the result. All failures come back as a
//! client-facing `Err(String)` before any partial result exists.

use crate::balancer;
use crate::models::AssignmentRequest;
use crate::validation::RequestValidator;

/// Generate balanced teams from a request JSON document.
///
/// Request shape:
/// ```json
/// {
///   "players": [{"id": "1", "name": "Alex", "rating": 3.0}, ...],
///   "green_captain_id": "1",
///   "orange_captain_id": "2"
/// }
/// ```
///
/// The response carries both team lists, both totals, the absolute
/// rating gap, and the fairness message.
pub fn generate_teams_json(request_json: &str) -> Result<String, String> {
    let request: AssignmentRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    RequestValidator::validate(&request).map_err(|e| e.to_string())?;

    let result = balancer::assign_balanced(&request).map_err(|e| e.to_string())?;

    serde_json::to_string(&result).map_err(|e| format!("Failed to serialize response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_request() -> Value {
        json!({
            "players": [
                {"id": "1", "name": "Alex", "rating": 3.0},
                {"id": "2", "name": "Jordan", "rating": 3.0},
                {"id": "3", "name": "Casey", "rating": 2.0},
                {"id": "4", "name": "Robin", "rating": 1.0}
            ],
            "green_captain_id": "1",
            "orange_captain_id": "2"
        })
    }

    #[test]
    fn generates_a_complete_response() {
        let response = generate_teams_json(&sample_request().to_string()).unwrap();
        let body: Value = serde_json::from_str(&response).unwrap();

        let mut all_ids: Vec<String> = body["green"]
            .as_array()
            .unwrap()
            .iter()
            .chain(body["orange"].as_array().unwrap())
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect();
        all_ids.sort();
        assert_eq!(all_ids, ["1", "2", "3", "4"]);

        assert!(body["green_total"].as_f64().unwrap() >= 0.0);
        assert!(body["orange_total"].as_f64().unwrap() >= 0.0);
        assert!(body["rating_gap"].as_f64().unwrap() >= 0.0);
        assert!(body["message"].is_string());
        assert_eq!(
            body["green"].as_array().unwrap().len(),
            body["orange"].as_array().unwrap().len()
        );
    }

    #[test]
    fn identical_captains_are_a_client_error() {
        let mut request = sample_request();
        request["orange_captain_id"] = json!("1");

        let err = generate_teams_json(&request.to_string()).unwrap_err();
        assert_eq!(err, "Captains must be different players (both '1')");
    }

    #[test]
    fn unknown_captain_is_a_client_error() {
        let mut request = sample_request();
        request["green_captain_id"] = json!("42");

        let err = generate_teams_json(&request.to_string()).unwrap_err();
        assert!(err.contains("'42' is unknown"));
    }

    #[test]
    fn out_of_range_rating_is_rejected_before_balancing() {
        let mut request = sample_request();
        request["players"][0]["rating"] = json!(3.5);

        let err = generate_teams_json(&request.to_string()).unwrap_err();
        assert!(err.contains("Invalid rating"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = generate_teams_json("{not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON request"));
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = generate_teams_json(r#"{"players": []}"#).unwrap_err();
        assert!(err.starts_with("Invalid JSON request"));
    }
}
