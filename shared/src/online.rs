use chrono::{DateTime, Utc};
use lambda_http::{http::StatusCode, Body, Error, Response};

use taskflow_atoms::presence::model::{HeartbeatPayload, OnlineStatus, Presence};
use taskflow_atoms::{respond, Document};

/// A heartbeat older than this counts as offline.
pub const ONLINE_WINDOW_SECONDS: i64 = 30;

/// POST /online-status - upsert the caller's last-seen stamp.
pub fn heartbeat(
    doc: &mut Document,
    body: &[u8],
    now: DateTime<Utc>,
) -> Result<Response<Body>, Error> {
    let payload: HeartbeatPayload = match serde_json::from_slice(body) {
        Ok(p) => p,
        Err(e) => return respond::bad_request(&format!("Invalid request body: {}", e)),
    };

    let stamp = now.to_rfc3339();
    match doc
        .presence
        .iter_mut()
        .find(|p| p.user_id == payload.user_id)
    {
        Some(presence) => {
            presence.user_name = payload.user_name;
            presence.last_seen = stamp;
        }
        None => doc.presence.push(Presence {
            user_id: payload.user_id,
            user_name: payload.user_name,
            last_seen: stamp,
        }),
    }
    respond::ok(StatusCode::OK, &serde_json::json!({ "message": "ok" }))
}

/// GET /online-status - every known user with a freshness verdict.
/// Purely timestamp-threshold based; no coordination across users.
pub fn list_statuses(doc: &Document, now: DateTime<Utc>) -> Result<Response<Body>, Error> {
    let statuses: Vec<OnlineStatus> = doc
        .presence
        .iter()
        .map(|p| {
            let online = DateTime::parse_from_rfc3339(&p.last_seen)
                .map(|seen| (now.timestamp() - seen.timestamp()) <= ONLINE_WINDOW_SECONDS)
                .unwrap_or(false);
            OnlineStatus {
                user_id: p.user_id.clone(),
                user_name: p.user_name.clone(),
                last_seen: p.last_seen.clone(),
                online,
            }
        })
        .collect();
    respond::ok(StatusCode::OK, &statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn heartbeat_freshness_window() {
        let mut doc = Document::default();
        let now = Utc.with_ymd_and_hms(2026, 8, 3, 12, 0, 0).unwrap();
        doc.presence.push(Presence {
            user_id: "u1".to_string(),
            user_name: "Ana".to_string(),
            last_seen: Utc
                .with_ymd_and_hms(2026, 8, 3, 11, 59, 40)
                .unwrap()
                .to_rfc3339(),
        });
        doc.presence.push(Presence {
            user_id: "u2".to_string(),
            user_name: "Bo".to_string(),
            last_seen: Utc
                .with_ymd_and_hms(2026, 8, 3, 11, 58, 0)
                .unwrap()
                .to_rfc3339(),
        });

        let resp = list_statuses(&doc, now).unwrap();
        let body = String::from_utf8(resp.body().to_vec()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        let statuses = parsed["data"].as_array().unwrap();
        assert_eq!(statuses[0]["online"], true);
        assert_eq!(statuses[1]["online"], false);
    }
}
