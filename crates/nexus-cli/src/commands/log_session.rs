use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use colored::Colorize;
use nexus_core::progression::record_session;
use nexus_core::{CampaignId, CareAction, EggState, RecordStore, Session, SessionId};

pub fn run(
    data: &Path,
    email: &str,
    campaign: &str,
    actions: &[String],
    recap: Option<&str>,
    date: Option<&str>,
) -> Result<(), String> {
    let actions = parse_actions(actions)?;
    let session_date = match date {
        Some(d) => parse_date(d)?,
        None => Utc::now(),
    };

    let mut store = super::open_store(data)?;
    let user = super::load_user(&store, email)?;
    let campaign_id = CampaignId::from(campaign);
    let (campaign, _) = store
        .campaign(&user.id, &campaign_id)
        .map_err(|e| e.to_string())?;

    let mut session =
        Session::new(SessionId::new(), campaign.id, user.id.clone(), session_date)
            .with_actions(&actions);
    if let Some(recap) = recap {
        session = session.with_recap(recap);
    }
    let earned = session.care_earned;

    let updated = record_session(&user, &session);
    let hatched = !matches!(user.egg, EggState::Hatched(_))
        && matches!(updated.egg, EggState::Hatched(_));
    let balance = updated.care_balance;
    let egg = updated.egg.clone();
    store
        .log_session(session, &user, updated)
        .map_err(|e| e.to_string())?;

    println!(
        "  {} +{earned} CARE for '{}'",
        "Session logged:".bold(),
        campaign.name
    );
    println!("  Balance: {} CARE", nexus_save::cards::balance(balance));
    if hatched {
        println!(
            "  {} Name it with: nexus name-dragon <name> --user {}",
            "Your Ember Egg hatched! 🐉".bold(),
            user.email
        );
    } else if let EggState::Incubating { sessions_remaining } = egg {
        println!("  Egg incubating: {sessions_remaining} more sessions to hatch");
    }
    Ok(())
}

/// Actions by keyword. Session attendance when none are given.
fn parse_actions(names: &[String]) -> Result<Vec<CareAction>, String> {
    if names.is_empty() {
        return Ok(vec![CareAction::SessionAttendance]);
    }
    names
        .iter()
        .map(|name| {
            let action = CareAction::parse(name).ok_or_else(|| {
                format!(
                    "unknown action: \"{name}\". Use: attendance, storytelling, helped, recap"
                )
            })?;
            if !action.is_available() {
                return Err(format!("\"{}\" is coming soon", action.label()));
            }
            Ok(action)
        })
        .collect()
}

fn parse_date(s: &str) -> Result<DateTime<Utc>, String> {
    let day = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date \"{s}\" (expected YYYY-MM-DD): {e}"))?;
    day.and_hms_opt(0, 0, 0)
        .map(|at| at.and_utc())
        .ok_or_else(|| format!("invalid date \"{s}\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_default_to_attendance() {
        assert_eq!(parse_actions(&[]).unwrap(), vec![CareAction::SessionAttendance]);
    }

    #[test]
    fn nfc_is_rejected() {
        let err = parse_actions(&["nfc".to_string()]).unwrap_err();
        assert!(err.contains("coming soon"));
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(parse_actions(&["dancing".to_string()]).is_err());
    }

    #[test]
    fn dates_are_midnight_utc() {
        let at = parse_date("2024-05-06").unwrap();
        assert_eq!(at.to_rfc3339(), "2024-05-06T00:00:00+00:00");
        assert!(parse_date("06/05/2024").is_err());
    }
}
