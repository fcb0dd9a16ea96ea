//! Action handlers and the table that maps each [`ActionKind`] to one.
//!
//! Where an action leads afterwards is fixed here rather than in content.

use academy_rules::{ActionKind, LocationId, Skill, Vitality};
use std::collections::BTreeMap;
use tracing::info;

use super::{GameEngine, Outcome, Transition};
use crate::console::{Console, Tone};
use crate::random::RandomSource;
use crate::{render, Result};

pub const CLOUD_ACADEMY: &str = "cloud_academy";
pub const LAMBDA_WORKSHOP: &str = "lambda_workshop";
pub const FINAL_CHALLENGE: &str = "final_challenge";

/// Locations the built-in handlers send the player to.
pub fn required_locations() -> [LocationId; 3] {
    [
        LocationId::new(CLOUD_ACADEMY),
        LocationId::new(LAMBDA_WORKSHOP),
        LocationId::new(FINAL_CHALLENGE),
    ]
}

pub type ActionHandler<C, R> = fn(&mut GameEngine<C, R>) -> Result<Transition>;

/// Registered handlers, one per action kind.
pub struct ActionTable<C, R> {
    handlers: BTreeMap<ActionKind, ActionHandler<C, R>>,
}

impl<C: Console, R: RandomSource> ActionTable<C, R> {
    pub fn empty() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Every built-in action.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.register(ActionKind::Status, show_status);
        table.register(ActionKind::Ec2Launch, ec2_launch);
        table.register(ActionKind::SecurityGroup, security_group);
        table.register(ActionKind::CreateBucket, create_bucket);
        table.register(ActionKind::BucketPolicy, bucket_policy);
        table.register(ActionKind::MultiAz, multi_az);
        table.register(ActionKind::NatGateway, nat_gateway);
        table.register(ActionKind::CreateLambda, create_lambda);
        table.register(ActionKind::ApiGateway, api_gateway);
        table.register(ActionKind::FinalExam, final_exam);
        table
    }

    pub fn register(&mut self, kind: ActionKind, handler: ActionHandler<C, R>) {
        self.handlers.insert(kind, handler);
    }

    pub fn remove(&mut self, kind: ActionKind) -> Option<ActionHandler<C, R>> {
        self.handlers.remove(&kind)
    }

    pub fn get(&self, kind: ActionKind) -> Option<ActionHandler<C, R>> {
        self.handlers.get(&kind).copied()
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.handlers.contains_key(&kind)
    }
}

/// A chance of taking damage after an action.
#[derive(Debug, Clone, Copy)]
pub struct Hazard {
    /// Triggers when the draw is strictly below this.
    pub chance: f64,
    pub damage: u32,
    pub message: &'static str,
}

/// Effects of completing a lab exercise, applied in field order.
#[derive(Debug, Clone, Copy)]
pub struct LabReward {
    pub headline: &'static str,
    pub detail: &'static str,
    pub item: Option<&'static str>,
    pub score: u32,
    pub skills: &'static [(Skill, u32)],
    pub hazard: Option<Hazard>,
    pub next: &'static str,
}

pub const EC2_LAUNCH: LabReward = LabReward {
    headline: "You successfully launched an EC2 instance!",
    detail: "The instance is now running and accessible.",
    item: Some("EC2 Instance Key"),
    score: 10,
    skills: &[(Skill::Compute, 1)],
    hazard: Some(Hazard {
        chance: 0.3,
        damage: 20,
        message: "Oh no! You forgot to set a proper security group and your instance was compromised!",
    }),
    next: LAMBDA_WORKSHOP,
};

pub const SECURITY_GROUP: LabReward = LabReward {
    headline: "You configured secure and efficient security groups!",
    detail: "Your instances are now protected from unauthorized access.",
    item: None,
    score: 15,
    skills: &[(Skill::Security, 2)],
    hazard: None,
    next: LAMBDA_WORKSHOP,
};

pub const CREATE_BUCKET: LabReward = LabReward {
    headline: "You created an S3 bucket with proper configurations!",
    detail: "The bucket is ready to store your application data securely.",
    item: Some("S3 Access Key"),
    score: 10,
    skills: &[(Skill::Storage, 1)],
    hazard: None,
    next: LAMBDA_WORKSHOP,
};

pub const BUCKET_POLICY: LabReward = LabReward {
    headline: "You implemented a secure bucket policy!",
    detail: "Your data is now protected with proper access controls.",
    item: None,
    score: 15,
    skills: &[(Skill::Security, 1), (Skill::Storage, 1)],
    hazard: None,
    next: LAMBDA_WORKSHOP,
};

pub const MULTI_AZ: LabReward = LabReward {
    headline: "You designed a resilient multi-AZ architecture!",
    detail: "Your application can now withstand AZ failures.",
    item: None,
    score: 20,
    skills: &[(Skill::Networking, 2)],
    hazard: None,
    next: LAMBDA_WORKSHOP,
};

pub const NAT_GATEWAY: LabReward = LabReward {
    headline: "You successfully configured a NAT Gateway!",
    detail: "Your private instances can now access the internet securely.",
    item: None,
    score: 25,
    skills: &[(Skill::Networking, 2), (Skill::Security, 1)],
    hazard: None,
    next: LAMBDA_WORKSHOP,
};

pub const CREATE_LAMBDA: LabReward = LabReward {
    headline: "You created a Lambda function that processes data automatically!",
    detail: "Your serverless application is now running efficiently.",
    item: Some("Lambda Function URL"),
    score: 20,
    skills: &[(Skill::Serverless, 2)],
    hazard: None,
    next: FINAL_CHALLENGE,
};

pub const API_GATEWAY: LabReward = LabReward {
    headline: "You set up an API Gateway to expose your Lambda functions!",
    detail: "Your serverless API is now accessible to clients.",
    item: None,
    score: 25,
    skills: &[(Skill::Networking, 1), (Skill::Serverless, 2)],
    hazard: None,
    next: FINAL_CHALLENGE,
};

impl<C: Console, R: RandomSource> GameEngine<C, R> {
    pub(crate) fn complete_lab(&mut self, reward: &LabReward) -> Result<Transition> {
        self.console.blank();
        self.console.say(Tone::Success, reward.headline);
        self.console.say(Tone::Plain, reward.detail);

        if let Some(item) = reward.item {
            self.grant_item(item);
        }
        self.award_score(reward.score);
        for &(skill, amount) in reward.skills {
            self.train(skill, amount);
        }

        if let Some(hazard) = reward.hazard {
            let draw = self.rng.next_unit();
            if draw < hazard.chance {
                info!(draw, damage = hazard.damage, "random incident");
                self.console.blank();
                self.console.say(Tone::Danger, hazard.message);
                if self.injure(hazard.damage) == Vitality::Depleted {
                    return Ok(Transition::Finish(Outcome::GameOver {
                        reason: "You ran out of health!".to_string(),
                    }));
                }
            }
        }

        self.wait_for_enter()?;
        Ok(Transition::Goto(LocationId::new(reward.next)))
    }
}

fn show_status<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    render::status(&mut engine.console, &engine.player);
    engine.wait_for_enter()?;
    Ok(Transition::Stay)
}

fn ec2_launch<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    engine.complete_lab(&EC2_LAUNCH)
}

fn security_group<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    engine.complete_lab(&SECURITY_GROUP)
}

fn create_bucket<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    engine.complete_lab(&CREATE_BUCKET)
}

fn bucket_policy<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    engine.complete_lab(&BUCKET_POLICY)
}

fn multi_az<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    engine.complete_lab(&MULTI_AZ)
}

fn nat_gateway<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    engine.complete_lab(&NAT_GATEWAY)
}

fn create_lambda<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    engine.complete_lab(&CREATE_LAMBDA)
}

fn api_gateway<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    engine.complete_lab(&API_GATEWAY)
}

fn final_exam<C: Console, R: RandomSource>(engine: &mut GameEngine<C, R>) -> Result<Transition> {
    engine.run_final_exam()
}
