//! Built-in seed catalog. These records are never persisted; readers always
//! see them ahead of any user-created gigs. Their applicant counts are
//! immutable here, which is why the listing store keeps increments in a
//! separate overlay.

use crate::models::{Category, Gig, GigStatus, LocationType, PostedBy};

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

fn avatar(seed: &str) -> String {
    format!("{}{}", AVATAR_BASE, seed)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_gigs() -> Vec<Gig> {
    vec![
        Gig {
            id: "1".into(),
            title: "UI Design for Fintech App Landing Page".into(),
            description: "Need a clean, modern dark-mode landing page for a crypto wallet app. High-fidelity Figma file required.".into(),
            category: Category::Design,
            budget: 2500,
            deadline: "2026-02-22".into(),
            skills: strings(&["Figma", "UI/UX", "Dark Mode"]),
            posted_by: PostedBy {
                name: "Arjun Mehta".into(),
                email: "arjun@college.edu".into(),
                department: "Computer Science".into(),
                year: "3rd Year".into(),
                college: "IIT Delhi".into(),
                rating: 4.8,
                hustles_completed: 8,
                verified: true,
                avatar: avatar("Aneka"),
            },
            status: GigStatus::Open,
            date_posted: "2026-02-14".into(),
            location: "Central Library, IIT Delhi".into(),
            location_type: LocationType::OnCampus,
            meetup_details: "Let's sync at the Central Library cafe on weekdays after 4 PM.".into(),
            what_i_need_help: strings(&[
                "Create a high-fidelity landing page with hero, features, and CTA sections",
                "Design 3 responsive variants (desktop, tablet, mobile)",
                "Follow crypto/fintech dark aesthetic with neon accents",
            ]),
            applicants: 7,
        },
        Gig {
            id: "2".into(),
            title: "TikTok/Reels Editor for Campus Event".into(),
            description: "Edit 5 raw clips into high-energy, subtitled Reels. Must understand Gen-Z pacing and trends.".into(),
            category: Category::Video,
            budget: 1500,
            deadline: "2026-02-20".into(),
            skills: strings(&["CapCut", "Reels", "Trending Audio"]),
            posted_by: PostedBy {
                name: "Priya Sharma".into(),
                email: "priya@college.edu".into(),
                department: "Mass Communication".into(),
                year: "2nd Year".into(),
                college: "Christ University".into(),
                rating: 4.5,
                hustles_completed: 3,
                verified: true,
                avatar: avatar("Priya"),
            },
            status: GigStatus::Open,
            date_posted: "2026-02-13".into(),
            location: "Remote".into(),
            location_type: LocationType::Remote,
            meetup_details: "All communication via Google Meet. Raw files will be shared on Drive.".into(),
            what_i_need_help: strings(&[
                "Edit 5 short-form videos (15-30 seconds each)",
                "Add trending audio, captions, and transitions",
                "Deliver in vertical format optimized for Instagram Reels",
            ]),
            applicants: 12,
        },
        Gig {
            id: "3".into(),
            title: "Python Script for Web Scraping".into(),
            description: "Need a script to scrape product prices from 3 specific sites daily. Output to CSV/Google Sheets.".into(),
            category: Category::Code,
            budget: 3000,
            deadline: "2026-02-25".into(),
            skills: strings(&["Python", "BeautifulSoup", "Automation"]),
            posted_by: PostedBy {
                name: "Rohan Gupta".into(),
                email: "rohan@college.edu".into(),
                department: "Economics".into(),
                year: "4th Year".into(),
                college: "SRCC Delhi".into(),
                rating: 4.9,
                hustles_completed: 15,
                verified: true,
                avatar: avatar("Rohan"),
            },
            status: GigStatus::Open,
            date_posted: "2026-02-15".into(),
            location: "E-commerce Lab".into(),
            location_type: LocationType::Hybrid,
            meetup_details: "Initial meeting at campus, then remote collaboration.".into(),
            what_i_need_help: strings(&[
                "Write a Python web scraper for 3 e-commerce websites",
                "Automate daily price tracking with cron/scheduler",
                "Export data to Google Sheets via API",
            ]),
            applicants: 5,
        },
        Gig {
            id: "4".into(),
            title: "Market Research for Sustainability Brand".into(),
            description: "Find 50 eco-conscious clothing brands and catalog their pricing strategies in Google Sheets.".into(),
            category: Category::Data,
            budget: 1000,
            deadline: "2026-02-28".into(),
            skills: strings(&["Research", "Google Sheets", "Analysis"]),
            posted_by: PostedBy {
                name: "Sneha Patel".into(),
                email: "sneha@college.edu".into(),
                department: "Business Administration".into(),
                year: "2nd Year".into(),
                college: "NMIMS Mumbai".into(),
                rating: 4.3,
                hustles_completed: 2,
                verified: false,
                avatar: avatar("Sneha"),
            },
            status: GigStatus::Open,
            date_posted: "2026-02-12".into(),
            location: "Remote".into(),
            location_type: LocationType::Remote,
            meetup_details: "Weekly check-in on Zoom. All docs shared on Google Drive.".into(),
            what_i_need_help: strings(&[
                "Research and list 50 sustainable fashion brands",
                "Catalog pricing tiers, target audience, and USP for each",
                "Create a comparative analysis spreadsheet",
            ]),
            applicants: 3,
        },
        Gig {
            id: "5".into(),
            title: "Campus Event Poster Design".into(),
            description: "Design an eye-catching poster for our annual tech fest. Need both print and social media versions.".into(),
            category: Category::Design,
            budget: 800,
            deadline: "2026-02-19".into(),
            skills: strings(&["Canva", "Illustrator", "Typography"]),
            posted_by: PostedBy {
                name: "Kiran Rao".into(),
                email: "kiran@college.edu".into(),
                department: "Electronics".into(),
                year: "3rd Year".into(),
                college: "VIT Vellore".into(),
                rating: 4.6,
                hustles_completed: 5,
                verified: true,
                avatar: avatar("Kiran"),
            },
            status: GigStatus::Open,
            date_posted: "2026-02-14".into(),
            location: "Design Lab, Block A".into(),
            location_type: LocationType::OnCampus,
            meetup_details: "Meet at Design Lab on Monday and Wednesday evenings.".into(),
            what_i_need_help: strings(&[
                "Design a vibrant A3 poster for the tech fest",
                "Create Instagram story and post variants",
                "Include QR code for registration link",
            ]),
            applicants: 9,
        },
        Gig {
            id: "6".into(),
            title: "Blog Writing for Student Newsletter".into(),
            description: "Write 4 engaging blog posts about campus life, internships, and student hacks. 800-1000 words each.".into(),
            category: Category::Writing,
            budget: 1200,
            deadline: "2026-03-01".into(),
            skills: strings(&["Content Writing", "SEO", "Blogging"]),
            posted_by: PostedBy {
                name: "Neha Singh".into(),
                email: "neha@college.edu".into(),
                department: "Journalism".into(),
                year: "1st Year".into(),
                college: "Symbiosis Pune".into(),
                rating: 4.1,
                hustles_completed: 1,
                verified: false,
                avatar: avatar("Neha"),
            },
            status: GigStatus::Open,
            date_posted: "2026-02-13".into(),
            location: "Remote".into(),
            location_type: LocationType::Remote,
            meetup_details: "All briefs shared via Notion. Async communication on WhatsApp.".into(),
            what_i_need_help: strings(&[
                "Write 4 blog posts on assigned campus-life topics",
                "Include relevant keywords for SEO optimization",
                "Submit in Google Docs with proper formatting",
            ]),
            applicants: 6,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_stable() {
        let gigs = seed_gigs();
        assert_eq!(gigs.len(), 6);
        assert_eq!(gigs[0].id, "1");
        assert_eq!(gigs[5].id, "6");
        assert!(gigs.iter().all(|g| g.status == GigStatus::Open));
    }
}
