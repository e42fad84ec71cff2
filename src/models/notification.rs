use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Message,
    Favorite,
    Contract,
    Payment,
    Property,
    Visit,
    #[serde(other)]
    Other,
}

/// An entry in the user's activity feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    /// Where following the notification leads, e.g. "/contracts"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Notification {
    /// Short relative age: "just now", "3h ago", "2d ago", or the date
    /// once it is a week old
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let hours = (now - self.timestamp).num_hours();
        if hours < 1 {
            "just now".to_string()
        } else if hours < 24 {
            format!("{}h ago", hours)
        } else if hours / 24 < 7 {
            format!("{}d ago", hours / 24)
        } else {
            self.timestamp.format("%d/%m/%Y").to_string()
        }
    }
}

/// Mark one notification read. Returns false if the id is unknown.
pub fn mark_read(notifications: &mut [Notification], id: u32) -> bool {
    match notifications.iter_mut().find(|n| n.id == id) {
        Some(notification) => {
            notification.read = true;
            true
        }
        None => false,
    }
}

/// Mark everything read, returning how many changed
pub fn mark_all_read(notifications: &mut [Notification]) -> usize {
    let mut changed = 0;
    for notification in notifications.iter_mut().filter(|n| !n.read) {
        notification.read = true;
        changed += 1;
    }
    changed
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn feed() -> Vec<Notification> {
        serde_json::from_value(json!([
            {
                "id": 1, "type": "message", "title": "Nouveau message",
                "description": "Ahmed Karim a répondu à votre demande de visite",
                "timestamp": "2024-01-15T14:30:00Z", "read": false,
                "avatar": "AK", "action": "/messages?contact=Ahmed Karim"
            },
            {
                "id": 3, "type": "contract", "title": "Contrat à signer",
                "description": "Votre contrat est prêt pour signature",
                "timestamp": "2024-01-14T16:45:00Z", "read": true, "action": "/contracts"
            },
            {
                "id": 7, "type": "promotion", "title": "Offre",
                "description": "-10% ce mois", "timestamp": "2024-01-10T08:00:00Z"
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_parses_feed_and_unknown_kinds() {
        let notifications = feed();
        assert_eq!(notifications[0].kind, NotificationKind::Message);
        assert_eq!(notifications[2].kind, NotificationKind::Other);
        assert!(!notifications[2].read);
        assert_eq!(unread_count(&notifications), 2);
    }

    #[test]
    fn test_mark_read() {
        let mut notifications = feed();
        assert!(mark_read(&mut notifications, 1));
        assert!(!mark_read(&mut notifications, 42));
        assert_eq!(unread_count(&notifications), 1);
    }

    #[test]
    fn test_mark_all_read_counts_changes() {
        let mut notifications = feed();
        assert_eq!(mark_all_read(&mut notifications), 2);
        assert_eq!(mark_all_read(&mut notifications), 0);
        assert_eq!(unread_count(&notifications), 0);
    }

    #[test]
    fn test_age_label() {
        let notification = &feed()[0];
        let at = |h: i64| notification.timestamp + Duration::hours(h);

        assert_eq!(notification.age_label(at(0)), "just now");
        assert_eq!(notification.age_label(at(5)), "5h ago");
        assert_eq!(notification.age_label(at(50)), "2d ago");
        assert_eq!(
            notification.age_label(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            "15/01/2024"
        );
    }
}
