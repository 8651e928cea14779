mod accounts;
mod error;
mod listings;
mod models;
mod seed;
mod storage;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use accounts::{AccountStore, generate_id};
use listings::{GigQuery, ListingStore};
use models::{Category, Gig, GigStatus, LocationType, NewUser, PostedBy, Role, User};
use storage::SqliteStorage;

// Real submissions go through hosted forms; the local store only records the
// optimistic applicant-count bump.
const GIG_FORM_URL: &str = "https://airtable.com/appbUibQs2XIrnY6U/pagk2kYlarqT5xltv/form";
const APPLICATION_FORM_URL: &str = "https://airtable.com/appbUibQs2XIrnY6U/pag9Pwiqmunz7vThL/form";

#[derive(Parser)]
#[command(name = "gigboard")]
#[command(about = "Campus micro-gig board - browse, post, and apply locally")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account (also logs you in)
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// poster, hustler, or both
        #[arg(long, default_value = "both")]
        role: String,

        #[arg(long, default_value = "")]
        department: String,

        #[arg(long, default_value = "")]
        year: String,

        #[arg(long, default_value = "")]
        college: String,

        #[arg(long, default_value = "")]
        bio: String,

        /// Comma-separated list of skills
        #[arg(long)]
        skills: Option<String>,
    },

    /// Log in with email and password
    Login { email: String, password: String },

    /// Clear the active session
    Logout,

    /// Show who is logged in
    Whoami,

    /// View or edit your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Browse and manage gigs
    Gigs {
        #[command(subcommand)]
        command: GigCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the logged-in profile and posted gigs
    Show,

    /// Edit profile fields (persists across logins)
    Edit {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        year: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        college: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        avatar: Option<String>,
    },
}

#[derive(Subcommand)]
enum GigCommands {
    /// List gigs (open gigs only unless --all)
    List {
        /// Filter by category (design, video, data, code, writing, others)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive title search
        #[arg(short, long)]
        search: Option<String>,

        /// Include gigs that are not Open
        #[arg(long)]
        all: bool,
    },

    /// Show gig details
    Show {
        /// Gig ID
        id: String,
    },

    /// Post a new gig (requires login)
    Post {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: String,

        #[arg(long)]
        budget: i64,

        /// Deadline date, e.g. 2026-03-15
        #[arg(long)]
        deadline: String,

        /// Comma-separated list of skills
        #[arg(long)]
        skills: Option<String>,

        #[arg(long, default_value = "Remote")]
        location: String,

        /// on-campus, remote, or hybrid
        #[arg(long, default_value = "remote")]
        location_type: String,

        #[arg(long, default_value = "")]
        meetup: String,

        /// Task bullet, repeatable
        #[arg(long = "task")]
        tasks: Vec<String>,
    },

    /// Apply to a gig via the hosted form
    Apply {
        /// Gig ID
        id: String,
    },

    /// List gigs you posted
    Mine,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let storage = SqliteStorage::open()?;
    log::debug!("using store at {}", storage.path().display());
    let accounts = AccountStore::new(&storage);
    let listings = ListingStore::new(&storage);

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
            role,
            department,
            year,
            college,
            bio,
            skills,
        } => {
            let role: Role = role.parse().map_err(|e: String| anyhow!(e))?;
            let user = accounts.register(NewUser {
                name,
                email,
                password,
                department,
                year,
                college,
                bio,
                role,
                skills: split_skills(skills.as_deref()),
            })?;
            println!("Welcome, {}! You are now logged in.", user.name);
        }

        Commands::Login { email, password } => {
            let user = accounts.login(&email, &password)?;
            println!("Logged in as {} <{}>", user.name, user.email);
        }

        Commands::Logout => {
            accounts.logout()?;
            println!("Logged out.");
        }

        Commands::Whoami => match accounts.session()? {
            Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role),
            None => println!("Not logged in."),
        },

        Commands::Profile { command } => match command {
            ProfileCommands::Show => {
                let user = require_session(&accounts)?;
                print_profile(&user);

                let mine = listings.gigs_posted_by(&user.email)?;
                if mine.is_empty() {
                    println!("\nNo gigs yet. Start posting or applying!");
                } else {
                    if user.role.is_poster() {
                        println!("\nPosted gigs:");
                    } else {
                        println!("\nGig history:");
                    }
                    for gig in mine {
                        println!("  [{}] {} ({})", gig.id, gig.title, gig.status);
                    }
                }
            }

            ProfileCommands::Edit {
                name,
                year,
                department,
                college,
                bio,
                avatar,
            } => {
                let mut user = require_session(&accounts)?;
                apply_edit(&mut user.name, name);
                apply_edit(&mut user.year, year);
                apply_edit(&mut user.department, department);
                apply_edit(&mut user.college, college);
                apply_edit(&mut user.bio, bio);
                apply_edit(&mut user.avatar, avatar);
                accounts.update_profile(&user)?;
                println!("Profile updated.");
            }
        },

        Commands::Gigs { command } => match command {
            GigCommands::List {
                category,
                search,
                all,
            } => {
                let category = match category {
                    Some(c) => Some(c.parse::<Category>().map_err(|e| anyhow!(e))?),
                    None => None,
                };
                let gigs = listings.find_gigs(&GigQuery {
                    category,
                    search,
                    open_only: !all,
                })?;

                if gigs.is_empty() {
                    println!("No gigs found.");
                } else {
                    println!(
                        "{:<18} {:<10} {:<34} {:<22} {:>8}",
                        "ID", "CATEGORY", "TITLE", "POSTED BY", "BUDGET"
                    );
                    println!("{}", "-".repeat(96));
                    for gig in gigs {
                        println!(
                            "{:<18} {:<10} {:<34} {:<22} {:>8}",
                            truncate(&gig.id, 16),
                            gig.category.to_string(),
                            truncate(&gig.title, 32),
                            truncate(&gig.posted_by.name, 20),
                            format!("₹{}", gig.budget),
                        );
                    }
                }
            }

            GigCommands::Show { id } => match listings.get_gig(&id)? {
                Some(gig) => {
                    let applicants = listings.effective_applicants(&gig)?;
                    print_gig(&gig, applicants);
                }
                None => println!("Gig '{}' not found.", id),
            },

            GigCommands::Post {
                title,
                description,
                category,
                budget,
                deadline,
                skills,
                location,
                location_type,
                meetup,
                tasks,
            } => {
                let poster = require_session(&accounts)?;
                let category: Category = category.parse().map_err(|e: String| anyhow!(e))?;
                let location_type: LocationType =
                    location_type.parse().map_err(|e: String| anyhow!(e))?;

                let gig = Gig {
                    id: generate_id(),
                    title,
                    description,
                    category,
                    budget,
                    deadline,
                    skills: split_skills(skills.as_deref()),
                    posted_by: PostedBy::snapshot_of(&poster),
                    status: GigStatus::Open,
                    date_posted: chrono::Local::now().format("%Y-%m-%d").to_string(),
                    location,
                    location_type,
                    meetup_details: meetup,
                    what_i_need_help: tasks,
                    applicants: 0,
                };
                let id = gig.id.clone();
                listings.add_gig(gig)?;
                println!("Posted gig {}", id);
                println!("To reach applicants beyond this device, also submit the hosted form:");
                println!("  {}", GIG_FORM_URL);
            }

            GigCommands::Apply { id } => match listings.get_gig(&id)? {
                Some(gig) => {
                    listings.increment_applicants(&id)?;
                    // re-read so in-place bumps on persisted gigs show up
                    let gig = listings.get_gig(&id)?.unwrap_or(gig);
                    let applicants = listings.effective_applicants(&gig)?;
                    println!("Applying to: {}", gig.title);
                    println!("Submit your application here:");
                    println!("  {}", APPLICATION_FORM_URL);
                    println!("Applicants so far: {}", applicants);
                }
                None => println!("Gig '{}' not found.", id),
            },

            GigCommands::Mine => {
                let user = require_session(&accounts)?;
                let mine = listings.gigs_posted_by(&user.email)?;
                if mine.is_empty() {
                    println!("No gigs yet. Start posting or applying!");
                } else {
                    for gig in mine {
                        println!(
                            "[{}] {} ({}, ₹{})",
                            gig.id, gig.title, gig.status, gig.budget
                        );
                    }
                }
            }
        },
    }

    Ok(())
}

fn require_session(accounts: &AccountStore) -> Result<User> {
    accounts
        .session()?
        .ok_or_else(|| anyhow!("Not logged in. Run 'gigboard login' or 'gigboard register' first."))
}

fn print_profile(user: &User) {
    println!("{} <{}>", user.name, user.email);
    println!(
        "{} • {} • {}",
        or_dash(&user.year),
        or_dash(&user.department),
        or_dash(&user.college)
    );
    println!("Role: {}", user.role);
    if user.rating > 0.0 {
        println!("Rating: {}", user.rating);
    } else {
        println!("Rating: New");
    }
    println!("Gigs completed: {}", user.gigs_completed);
    if !user.bio.is_empty() {
        println!("\n{}", user.bio);
    }
    if user.role.is_hustler() && !user.skills.is_empty() {
        println!("\nSkills: {}", user.skills.join(", "));
    }
}

fn print_gig(gig: &Gig, applicants: u32) {
    println!("{} [{}]", gig.title, gig.status);
    println!("Category: {}  Budget: ₹{}", gig.category, gig.budget);
    println!("Deadline: {}  Posted: {}", gig.deadline, gig.date_posted);
    println!("Location: {} ({})", gig.location, gig.location_type);
    if !gig.meetup_details.is_empty() {
        println!("Meetup: {}", gig.meetup_details);
    }
    println!("Applicants: {}", applicants);
    println!("\n{}", gig.description);
    if !gig.what_i_need_help.is_empty() {
        println!("\nWhat I need help with:");
        for task in &gig.what_i_need_help {
            println!("  - {}", task);
        }
    }
    if !gig.skills.is_empty() {
        println!("\nSkills: {}", gig.skills.join(", "));
    }
    let poster = &gig.posted_by;
    println!(
        "\nPosted by {} <{}> ({}, {}){}",
        poster.name,
        poster.email,
        poster.department,
        poster.college,
        if poster.verified { " ✔" } else { "" }
    );
}

fn apply_edit(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn split_skills(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

fn truncate(s: &str, max: usize) -> String {
    // counts chars, not bytes; gig titles are ordinary user input and can be
    // non-ASCII
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skills() {
        assert_eq!(split_skills(None), Vec::<String>::new());
        assert_eq!(split_skills(Some("")), Vec::<String>::new());
        assert_eq!(
            split_skills(Some("Figma, UI/UX ,Dark Mode")),
            vec!["Figma", "UI/UX", "Dark Mode"]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long gig title here", 10), "a long ...");
    }

    #[test]
    fn test_truncate_multibyte_title() {
        // must cut on char boundaries, not bytes
        let title = "डिज़ाइन में मदद चाहिए - पोस्टर और बैनर";
        let cut = truncate(title, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate("डिज़ाइन", 32), "डिज़ाइन");
    }
}
