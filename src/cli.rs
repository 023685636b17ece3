// src/cli.rs
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::client::{ApiClient, FileStorage, Session, TokenStore};
use crate::core::ConfigManager;
use crate::types::{
    ActionResponse, ApplicationSource, CreateJobRequest, InvitationStatus, Job, Role, User,
};
use crate::web;

#[derive(Parser)]
#[command(name = "jobmatch")]
#[command(about = "JobMatch demo job board: API server and command-line client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the stored session file
    #[arg(long, global = true)]
    pub state_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// List public jobs
    Jobs {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one job
    Job { id: String },
    /// Demo sign-in with any email
    Login { email: String },
    /// Forget the stored token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Pick a role for the signed-in user (employer or talent)
    Onboard { role: String },
    /// Personalized job feed
    Feed,
    /// Apply to a job
    Apply {
        job_id: String,
        #[arg(long)]
        source: Option<String>,
    },
    /// List invitations received
    Invitations,
    /// Accept or decline an invitation
    Respond {
        invitation_id: String,
        #[arg(value_enum)]
        decision: Decision,
    },
    /// List submitted applications
    Applications,
    /// List jobs owned by the signed-in employer
    EmployerJobs,
    /// Post a new job
    CreateJob {
        #[arg(long)]
        title: String,
        /// Repeat or comma-separate
        #[arg(long = "tech", value_delimiter = ',', required = true)]
        technologies: Vec<String>,
        #[arg(long)]
        deadline: NaiveDate,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "requirement")]
        requirements: Vec<String>,
        /// Fill the description with the generator when none is given
        #[arg(long)]
        generate: bool,
    },
    /// Applicants of an owned job
    Applicants { job_id: String },
    /// Talent matches of an owned job
    Matches { job_id: String },
    /// Invite a talent to an owned job
    Invite { job_id: String, talent_id: String },
    /// Draft a job description
    Describe {
        #[arg(long)]
        title: String,
        #[arg(long = "tech", value_delimiter = ',', required = true)]
        technologies: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Decision {
    Accepted,
    Declined,
}

impl From<Decision> for InvitationStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Accepted => InvitationStatus::Accepted,
            Decision::Declined => InvitationStatus::Declined,
        }
    }
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let mut config = ConfigManager::load()?;
    if let Some(path) = cli.state_path {
        config.client.state_path = path;
    }

    let tokens = TokenStore::new(Arc::new(FileStorage::new(config.client.state_path.clone())));
    let api = ApiClient::from_config(&config.client, tokens)?;
    let mut session = Session::new(api);

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            return web::start_web_server(config.server).await;
        }
        Command::Jobs { search } => {
            let jobs = session.api().get_jobs(search.as_deref()).await?;
            if jobs.is_empty() {
                println!("No jobs found");
            }
            for job in &jobs {
                print_job_row(job);
            }
        }
        Command::Job { id } => {
            let job = session.api().get_job(&id).await?;
            print_job(&job);
        }
        Command::Login { email } => {
            let user = session.login(&email).await?;
            println!("✅ Signed in");
            print_user(&user);
        }
        Command::Logout => {
            session.logout();
            println!("✅ Signed out");
        }
        Command::Whoami => {
            session.init().await;
            match session.user() {
                Some(user) => print_user(user),
                None => println!("Not signed in"),
            }
        }
        Command::Onboard { role } => {
            let role: Role = role.parse().map_err(|e: String| anyhow!(e))?;
            let user = session.onboard(role).await?;
            println!("✅ Onboarding completed");
            print_user(&user);
        }
        Command::Feed => {
            for item in session.api().feed().await? {
                println!(
                    "{:>3}%  {:<10} {} at {} (deadline {}) [{}]",
                    item.score,
                    item.id,
                    item.title,
                    item.company,
                    item.deadline,
                    item.technologies.join(", ")
                );
            }
        }
        Command::Apply { job_id, source } => {
            let source = source
                .map(|s| s.parse::<ApplicationSource>())
                .transpose()
                .map_err(|e| anyhow!(e))?;
            let response = session.api().apply(&job_id, source).await?;
            print_action(&response);
        }
        Command::Invitations => {
            for invitation in session.api().invitations().await? {
                println!(
                    "{:<6} {:<9} {} at {} (deadline {})",
                    invitation.id,
                    invitation.status.as_str(),
                    invitation.job_title,
                    invitation.company,
                    invitation.deadline
                );
            }
        }
        Command::Respond {
            invitation_id,
            decision,
        } => {
            let response = session
                .api()
                .respond_to_invitation(&invitation_id, decision.into())
                .await?;
            print_action(&response);
        }
        Command::Applications => {
            for application in session.api().applications().await? {
                println!(
                    "{:<6} {} at {} via {:?} on {}",
                    application.id,
                    application.job_title,
                    application.company,
                    application.source,
                    application.applied_at.format("%Y-%m-%d")
                );
            }
        }
        Command::EmployerJobs => {
            for job in session.api().employer_jobs().await? {
                println!(
                    "{:<10} {:<28} {:>3} applicant(s)  {:?}  deadline {}",
                    job.id, job.title, job.applicants, job.status, job.deadline
                );
            }
        }
        Command::CreateJob {
            title,
            technologies,
            deadline,
            description,
            requirements,
            generate,
        } => {
            let description = match description {
                Some(text) => text,
                None if generate => {
                    session
                        .api()
                        .generate_job_description(&title, &technologies)
                        .await?
                        .description
                }
                None => String::new(),
            };
            let request = CreateJobRequest {
                title,
                description,
                tech_stack: technologies,
                requirements,
                deadline: Some(deadline),
            };
            let job = session.api().create_job(&request).await?;
            println!("✅ Job created");
            print_job(&job);
        }
        Command::Applicants { job_id } => {
            for applicant in session.api().job_applicants(&job_id).await? {
                println!(
                    "{:<6} {:<20} {:<28} {:<10} {}",
                    applicant.id,
                    applicant.name,
                    applicant.email,
                    applicant.source,
                    applicant.applied_at.format("%Y-%m-%d")
                );
            }
        }
        Command::Matches { job_id } => {
            for talent in session.api().matched_talents(&job_id).await? {
                println!(
                    "{:>3}%  {:<6} {:<20} {:<28} {:?}",
                    talent.match_score,
                    talent.id,
                    talent.name,
                    talent.email,
                    talent.invitation_status
                );
            }
        }
        Command::Invite { job_id, talent_id } => {
            let response = session.api().invite_talent(&job_id, &talent_id).await?;
            print_action(&response);
        }
        Command::Describe {
            title,
            technologies,
        } => {
            let response = session
                .api()
                .generate_job_description(&title, &technologies)
                .await?;
            println!("{}", response.description);
        }
    }

    info!("Command finished");
    Ok(())
}

fn print_job_row(job: &Job) {
    println!(
        "{:<10} {:<28} {:<24} deadline {}  [{}]",
        job.id,
        job.title,
        job.company,
        job.deadline,
        job.tech_stack.join(", ")
    );
}

fn print_job(job: &Job) {
    println!("{} ({})", job.title, job.id);
    println!("   Company: {}", job.company);
    println!("   Deadline: {}  Status: {:?}", job.deadline, job.status);
    println!("   Stack: {}", job.tech_stack.join(", "));
    if !job.requirements.is_empty() {
        println!("   Requirements:");
        for requirement in &job.requirements {
            println!("     - {}", requirement);
        }
    }
    println!();
    println!("{}", job.description);
}

fn print_user(user: &User) {
    println!("   Id: {}", user.id);
    println!("   Email: {}", user.email);
    if let Some(name) = &user.name {
        println!("   Name: {}", name);
    }
    println!(
        "   Role: {}",
        user.role.map(|r| r.as_str()).unwrap_or("not chosen")
    );
    if let Some(company) = &user.company {
        println!("   Company: {}", company);
    }
}

fn print_action(response: &ActionResponse) {
    println!("✅ {}", response.message);
    if let Some(at) = response.submitted_at {
        println!("   Submitted at: {}", at.to_rfc3339());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_create_job_with_comma_separated_tech() {
        let cli = Cli::try_parse_from([
            "jobmatch",
            "create-job",
            "--title",
            "Rust Engineer",
            "--tech",
            "Rust,Tokio",
            "--deadline",
            "2027-01-31",
        ])
        .unwrap();

        match cli.command {
            Command::CreateJob {
                title,
                technologies,
                deadline,
                generate,
                ..
            } => {
                assert_eq!(title, "Rust Engineer");
                assert_eq!(technologies, vec!["Rust", "Tokio"]);
                assert_eq!(deadline, NaiveDate::from_ymd_opt(2027, 1, 31).unwrap());
                assert!(!generate);
            }
            _ => panic!("expected create-job"),
        }
    }

    #[test]
    fn test_respond_only_accepts_terminal_decisions() {
        assert!(Cli::try_parse_from(["jobmatch", "respond", "inv1", "pending"]).is_err());

        let cli = Cli::try_parse_from(["jobmatch", "respond", "inv1", "accepted"]).unwrap();
        match cli.command {
            Command::Respond { decision, .. } => {
                assert_eq!(InvitationStatus::from(decision), InvitationStatus::Accepted)
            }
            _ => panic!("expected respond"),
        }
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::try_parse_from(["jobmatch", "serve", "--port", "9100"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { port: Some(9100) }));
    }
}
