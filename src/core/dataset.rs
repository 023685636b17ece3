// src/core/dataset.rs
//! Static demo dataset. Built once at startup and never mutated.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::BTreeMap;

use crate::types::{
    Applicant, Application, ApplicationSource, Invitation, InvitationStatus, Job, JobStatus, Role,
    TalentInvitationStatus, TalentMatch, User,
};

pub const DEFAULT_TALENT_ID: &str = "user1";

#[derive(Debug, Clone)]
pub struct Dataset {
    pub accounts: Vec<User>,
    pub jobs: Vec<Job>,
    pub applicants: BTreeMap<String, Vec<Applicant>>,
    pub matches: BTreeMap<String, Vec<TalentMatch>>,
    pub invitations: Vec<Invitation>,
    pub applications: Vec<Application>,
    /// Static match score of each open job for the talent feed
    pub feed_scores: BTreeMap<String, u8>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn account(id: &str, email: &str, name: &str, role: Role, company: Option<&str>) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        name: Some(name.to_string()),
        role: Some(role),
        company: company.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    description: &str,
    requirements: &[&str],
    tech_stack: &[&str],
    deadline: NaiveDate,
    application_count: u32,
    owner_id: &str,
    status: JobStatus,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        description: description.to_string(),
        requirements: strings(requirements),
        tech_stack: strings(tech_stack),
        deadline,
        application_count,
        owner_id: owner_id.to_string(),
        status,
    }
}

fn applicant(id: &str, name: &str, email: &str, source: &str, applied_at: DateTime<Utc>) -> Applicant {
    Applicant {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        source: source.to_string(),
        applied_at,
    }
}

fn talent_match(id: &str, name: &str, email: &str, score: u8, status: TalentInvitationStatus) -> TalentMatch {
    TalentMatch {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        match_score: score,
        invitation_status: status,
    }
}

impl Dataset {
    pub fn demo() -> Self {
        let accounts = vec![
            account(DEFAULT_TALENT_ID, "user@example.com", "Demo Talent", Role::Talent, None),
            account(
                "employer1",
                "employer@techcorp.com",
                "TechCorp Hiring",
                Role::Employer,
                Some("TechCorp"),
            ),
            account(
                "employer2",
                "jobs@talentpartners.io",
                "Talent Partners",
                Role::Employer,
                Some("Talent Partners Agency"),
            ),
        ];

        let jobs = vec![
            job(
                "1",
                "Senior React Developer",
                "TechCorp",
                "Looking for an experienced React developer to join our growing team. You will work on modern web applications using the latest technologies.",
                &[
                    "5+ years of React experience",
                    "Strong TypeScript knowledge",
                    "Experience with Next.js",
                    "Understanding of web performance optimization",
                ],
                &["React", "TypeScript", "Next.js", "Tailwind CSS"],
                date(2027, 3, 31),
                12,
                "employer1",
                JobStatus::Active,
            ),
            job(
                "2",
                "Full Stack Developer",
                "TechCorp",
                "Build scalable web applications across frontend and backend for our payments platform.",
                &[
                    "3+ years of full stack development",
                    "Node.js experience",
                    "React or Vue.js proficiency",
                    "Database design knowledge",
                ],
                &["Node.js", "React", "PostgreSQL", "Docker"],
                date(2027, 4, 15),
                8,
                "employer1",
                JobStatus::Active,
            ),
            job(
                "3",
                "DevOps Engineer",
                "CloudServices Inc",
                "Help us build and maintain our infrastructure. We are looking for a DevOps engineer with strong cloud experience.",
                &[
                    "4+ years of DevOps experience",
                    "AWS or GCP expertise",
                    "Kubernetes knowledge",
                    "CI/CD pipeline experience",
                ],
                &["AWS", "Kubernetes", "Docker", "Terraform"],
                date(2027, 3, 20),
                5,
                "employer2",
                JobStatus::Active,
            ),
            job(
                "4",
                "Product Designer",
                "Figma",
                "Shape the future of design tools: user research, interface design and design systems.",
                &[
                    "3+ years of product design experience",
                    "Portfolio showcasing design work",
                    "Experience with design tools",
                ],
                &["Figma", "User Research", "Prototyping", "Design Systems"],
                date(2025, 1, 31),
                25,
                "employer2",
                JobStatus::Closed,
            ),
            job(
                "5",
                "Backend Engineer",
                "Notion",
                "Design scalable APIs, optimize database queries and build data processing pipelines.",
                &[
                    "3+ years of backend development",
                    "Strong database design skills",
                    "Understanding of system design",
                ],
                &["Python", "PostgreSQL", "Redis", "GraphQL"],
                date(2027, 6, 30),
                45,
                "employer2",
                JobStatus::Active,
            ),
            job(
                "6",
                "Data Scientist",
                "OpenAI",
                "Develop and train machine learning models and run data analysis experiments with research teams.",
                &[
                    "Strong background in machine learning",
                    "Experience with Python and ML frameworks",
                    "Advanced statistics knowledge",
                ],
                &["Python", "Machine Learning", "TensorFlow", "Data Analysis"],
                date(2027, 8, 31),
                52,
                "employer2",
                JobStatus::Active,
            ),
        ];

        let mut applicants = BTreeMap::new();
        applicants.insert(
            "1".to_string(),
            vec![
                applicant("a1", "Alice Johnson", "alice@example.com", "Direct", at(2026, 2, 1, 9)),
                applicant("a2", "Bob Smith", "bob@example.com", "LinkedIn", at(2026, 2, 2, 14)),
                applicant("a3", "Carol White", "carol@example.com", "Referral", at(2026, 2, 3, 8)),
            ],
        );
        applicants.insert(
            "2".to_string(),
            vec![applicant("a4", "David Brown", "david@example.com", "Job Board", at(2026, 2, 1, 16))],
        );
        applicants.insert(
            "3".to_string(),
            vec![applicant("a5", "Erin Green", "erin@example.com", "Direct", at(2026, 1, 28, 11))],
        );

        let mut matches = BTreeMap::new();
        matches.insert(
            "1".to_string(),
            vec![
                talent_match("101", "Sarah Chen", "sarah@example.com", 94, TalentInvitationStatus::Pending),
                talent_match("102", "James Wilson", "james@example.com", 87, TalentInvitationStatus::None),
                talent_match("103", "Emma Davis", "emma@example.com", 82, TalentInvitationStatus::Accepted),
                talent_match("104", "Michael Kumar", "michael@example.com", 78, TalentInvitationStatus::None),
            ],
        );
        matches.insert(
            "2".to_string(),
            vec![
                talent_match("201", "Lisa Anderson", "lisa@example.com", 91, TalentInvitationStatus::None),
                talent_match("202", "Tom Rodriguez", "tom@example.com", 85, TalentInvitationStatus::Declined),
            ],
        );

        let invitations = vec![
            invitation("inv1", &jobs[0], InvitationStatus::Pending),
            invitation("inv2", &jobs[1], InvitationStatus::Accepted),
            invitation("inv3", &jobs[4], InvitationStatus::Declined),
            invitation("inv4", &jobs[2], InvitationStatus::Pending),
        ];

        let applications = vec![
            application("app1", &jobs[0], ApplicationSource::Manual, at(2026, 2, 10, 10)),
            application("app2", &jobs[1], ApplicationSource::Invitation, at(2026, 2, 13, 15)),
            application("app3", &jobs[2], ApplicationSource::Manual, at(2026, 2, 5, 9)),
            application("app4", &jobs[4], ApplicationSource::Manual, at(2026, 1, 31, 12)),
            application("app5", &jobs[3], ApplicationSource::Invitation, at(2026, 1, 20, 17)),
        ];

        let feed_scores = [("1", 95), ("2", 87), ("3", 78), ("5", 92), ("6", 85)]
            .into_iter()
            .map(|(id, score)| (id.to_string(), score))
            .collect();

        Self {
            accounts,
            jobs,
            applicants,
            matches,
            invitations,
            applications,
            feed_scores,
        }
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn account(&self, id: &str) -> Option<&User> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
    }

    pub fn default_talent(&self) -> Option<&User> {
        self.account(DEFAULT_TALENT_ID)
    }
}

fn invitation(id: &str, job: &Job, status: InvitationStatus) -> Invitation {
    Invitation {
        id: id.to_string(),
        job_id: job.id.clone(),
        job_title: job.title.clone(),
        company: job.company.clone(),
        deadline: job.deadline,
        status,
        talent_id: DEFAULT_TALENT_ID.to_string(),
    }
}

fn application(id: &str, job: &Job, source: ApplicationSource, applied_at: DateTime<Utc>) -> Application {
    Application {
        id: id.to_string(),
        job_id: job.id.clone(),
        job_title: job.title.clone(),
        company: job.company.clone(),
        source,
        applied_at,
    }
}
