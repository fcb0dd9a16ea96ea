//! Game mechanics: skills, skill checks and the closed set of actions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::RulesError;

/// The cloud disciplines a player can train.
///
/// The declaration order is the iteration order of every skill map, which
/// fixes the status listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Compute,
    Storage,
    Networking,
    Security,
    Serverless,
}

impl Skill {
    /// All skills in display order.
    pub const ALL: [Skill; 5] = [
        Skill::Compute,
        Skill::Storage,
        Skill::Networking,
        Skill::Security,
        Skill::Serverless,
    ];

    /// Lowercase identifier as used in content files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Compute => "compute",
            Skill::Storage => "storage",
            Skill::Networking => "networking",
            Skill::Security => "security",
            Skill::Serverless => "serverless",
        }
    }

    /// Capitalized name for player-facing text.
    pub fn title(&self) -> &'static str {
        match self {
            Skill::Compute => "Compute",
            Skill::Storage => "Storage",
            Skill::Networking => "Networking",
            Skill::Security => "Security",
            Skill::Serverless => "Serverless",
        }
    }
}

impl FromStr for Skill {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.as_str() == s)
            .ok_or_else(|| RulesError::UnknownSkill(s.to_string()))
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Skill name -> level.
pub type SkillMap = BTreeMap<Skill, u32>;

/// Skill amounts in the order they were authored (gains or requirements).
pub type SkillList = Vec<(Skill, u32)>;

/// The first requirement a player failed to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillShortfall {
    pub skill: Skill,
    pub required: u32,
    pub current: u32,
}

/// Evaluate a skill check against current levels.
///
/// Requirements are visited in the given order and the first unmet one is
/// returned; later requirements are not inspected. Missing skills count as 0.
pub fn check_skills(levels: &SkillMap, requirements: &[(Skill, u32)]) -> Result<(), SkillShortfall> {
    for &(skill, required) in requirements {
        let current = levels.get(&skill).copied().unwrap_or(0);
        if current < required {
            return Err(SkillShortfall {
                skill,
                required,
                current,
            });
        }
    }
    Ok(())
}

/// Every named action an option can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Status,
    Ec2Launch,
    SecurityGroup,
    CreateBucket,
    BucketPolicy,
    MultiAz,
    NatGateway,
    CreateLambda,
    ApiGateway,
    FinalExam,
}

impl ActionKind {
    pub const ALL: [ActionKind; 10] = [
        ActionKind::Status,
        ActionKind::Ec2Launch,
        ActionKind::SecurityGroup,
        ActionKind::CreateBucket,
        ActionKind::BucketPolicy,
        ActionKind::MultiAz,
        ActionKind::NatGateway,
        ActionKind::CreateLambda,
        ActionKind::ApiGateway,
        ActionKind::FinalExam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Status => "status",
            ActionKind::Ec2Launch => "ec2_launch",
            ActionKind::SecurityGroup => "security_group",
            ActionKind::CreateBucket => "create_bucket",
            ActionKind::BucketPolicy => "bucket_policy",
            ActionKind::MultiAz => "multi_az",
            ActionKind::NatGateway => "nat_gateway",
            ActionKind::CreateLambda => "create_lambda",
            ActionKind::ApiGateway => "api_gateway",
            ActionKind::FinalExam => "final_exam",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(pairs: &[(Skill, u32)]) -> SkillMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_skill_from_str() {
        assert_eq!("compute".parse::<Skill>().unwrap(), Skill::Compute);
        assert_eq!("serverless".parse::<Skill>().unwrap(), Skill::Serverless);
        assert!(matches!(
            "databases".parse::<Skill>(),
            Err(RulesError::UnknownSkill(name)) if name == "databases"
        ));
    }

    #[test]
    fn test_check_passes_when_all_met() {
        let current = levels(&[(Skill::Networking, 2), (Skill::Serverless, 1)]);
        let required = [(Skill::Networking, 2), (Skill::Serverless, 1)];
        assert!(check_skills(&current, &required).is_ok());
    }

    #[test]
    fn test_check_reports_first_failure_in_given_order() {
        let current = levels(&[(Skill::Networking, 1), (Skill::Serverless, 0)]);

        let shortfall =
            check_skills(&current, &[(Skill::Serverless, 3), (Skill::Networking, 2)]).unwrap_err();
        assert_eq!(
            shortfall,
            SkillShortfall {
                skill: Skill::Serverless,
                required: 3,
                current: 0,
            }
        );

        let shortfall =
            check_skills(&current, &[(Skill::Networking, 2), (Skill::Serverless, 3)]).unwrap_err();
        assert_eq!(shortfall.skill, Skill::Networking);
    }

    #[test]
    fn test_missing_skill_counts_as_zero() {
        let shortfall = check_skills(&SkillMap::new(), &[(Skill::Storage, 1)]).unwrap_err();
        assert_eq!(shortfall.current, 0);
    }

    #[test]
    fn test_action_names_match_content_identifiers() {
        for action in ActionKind::ALL {
            let parsed: ActionKind =
                serde_json::from_value(serde_json::Value::String(action.as_str().into())).unwrap();
            assert_eq!(parsed, action);
        }
    }
}
