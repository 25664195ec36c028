//! Dashboard milestones and deadline urgency.
//!
//! Milestones come from the dashboard, not the event store. The core only
//! classifies them; tiers pick display attributes and never affect scheduling.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A deadline-like item with a precomputed countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    /// Display string, e.g. "May 6, 2025". Not parsed.
    pub date: String,
    /// Days until due; 0 = due today, negative = overdue.
    #[serde(rename = "daysLeft", alias = "days_left")]
    pub days_left: i64,
}

impl Milestone {
    pub fn new(title: impl Into<String>, date: impl Into<String>, days_left: i64) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            days_left,
        }
    }
}

/// Parse a JSON array of milestones.
pub fn milestones_from_json(json: &str) -> Result<Vec<Milestone>> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    Critical,
    Warning,
    Normal,
}

/// Display attributes for an urgency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrgencyStyle {
    pub container: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

impl UrgencyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Normal => "normal",
        }
    }

    pub fn style(&self) -> UrgencyStyle {
        match self {
            Self::Critical => UrgencyStyle {
                container: "red-50",
                text: "red-700",
                icon: "exclamation-circle",
            },
            Self::Warning => UrgencyStyle {
                container: "amber-50",
                text: "amber-700",
                icon: "fire",
            },
            Self::Normal => UrgencyStyle {
                container: "blue-50",
                text: "blue-700",
                icon: "calendar",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Urgency {
    pub tier: UrgencyTier,
    pub label: String,
}

/// Map days remaining to a tier and countdown label.
///
/// Overdue milestones stay in the critical tier but get their own label.
pub fn classify(days_left: i64) -> Urgency {
    let tier = match days_left {
        i64::MIN..=1 => UrgencyTier::Critical,
        2..=3 => UrgencyTier::Warning,
        _ => UrgencyTier::Normal,
    };
    let label = match days_left {
        0 => "Due today!".to_string(),
        1 => "1 day left".to_string(),
        -1 => "1 day overdue".to_string(),
        n if n < 0 => format!("{} days overdue", n.unsigned_abs()),
        n => format!("{n} days left"),
    };
    Urgency { tier, label }
}

/// A milestone ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedMilestone {
    pub title: String,
    pub date: String,
    pub days_left: i64,
    pub tier: UrgencyTier,
    pub label: String,
    pub style: UrgencyStyle,
}

/// Classify every milestone, keeping input order.
pub fn classify_milestones(milestones: &[Milestone]) -> Vec<ClassifiedMilestone> {
    milestones
        .iter()
        .map(|m| {
            let Urgency { tier, label } = classify(m.days_left);
            ClassifiedMilestone {
                title: m.title.clone(),
                date: m.date.clone(),
                days_left: m.days_left,
                tier,
                label,
                style: tier.style(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(days: i64, tier: UrgencyTier, label: &str) {
        let u = classify(days);
        assert_eq!(u.tier, tier, "tier for {days}");
        assert_eq!(u.label, label, "label for {days}");
    }

    #[test]
    fn tier_boundaries() {
        check(0, UrgencyTier::Critical, "Due today!");
        check(1, UrgencyTier::Critical, "1 day left");
        check(2, UrgencyTier::Warning, "2 days left");
        check(3, UrgencyTier::Warning, "3 days left");
        check(4, UrgencyTier::Normal, "4 days left");
        check(11, UrgencyTier::Normal, "11 days left");
    }

    #[test]
    fn overdue_is_critical_with_its_own_label() {
        check(-1, UrgencyTier::Critical, "1 day overdue");
        check(-5, UrgencyTier::Critical, "5 days overdue");
        check(i64::MIN, UrgencyTier::Critical, "9223372036854775808 days overdue");
    }

    #[test]
    fn styles_differ_per_tier() {
        assert_eq!(UrgencyTier::Critical.style().icon, "exclamation-circle");
        assert_eq!(UrgencyTier::Warning.style().text, "amber-700");
        assert_eq!(UrgencyTier::Normal.style().container, "blue-50");
    }

    #[test]
    fn classifies_in_input_order() {
        let json = r#"[
            {"title": "SAT Full Mock Test", "date": "May 6, 2025", "daysLeft": 2},
            {"title": "Grammar Quiz", "date": "May 4, 2025", "daysLeft": 0},
            {"title": "Math Practice Section", "date": "May 15, 2025", "days_left": 11}
        ]"#;
        let milestones = milestones_from_json(json).unwrap();
        let classified = classify_milestones(&milestones);
        let tiers: Vec<_> = classified.iter().map(|c| c.tier).collect();
        assert_eq!(
            tiers,
            [UrgencyTier::Warning, UrgencyTier::Critical, UrgencyTier::Normal]
        );
        assert_eq!(classified[1].label, "Due today!");
    }

    #[test]
    fn empty_list_is_not_an_error() {
        assert!(classify_milestones(&[]).is_empty());
        assert!(milestones_from_json("[]").unwrap().is_empty());
    }
}
