//! Reference data for a fresh database
//!
//! Seeding is idempotent: interests and onboarding questions are keyed by
//! name/text, tracks by title. Re-running only resets track interest links
//! and backfills missing starter pages.

use serde::Serialize;
use crate::models::QuestionKind;
use crate::services::{CacheKey, CacheManager, NewCareerTrack, PostgresClient, PostgresError};

pub const INTERESTS: &[&str] = &[
    "Tech", "Coding", "Data", "Design", "Figma", "Cybersecurity", "Hacking",
    "CTF", "Games", "Game Design", "Unity", "Unreal Engine", "AI", "Neural Networks",
    "Startups", "Business", "YouTube", "Vlogging", "Public Speaking",
    "3D Modelling", "Product", "Marketing", "Machine Learning",
    "Mobile Apps", "Backend", "Frontend", "UX/UI", "No Code", "Open Source",
    "Storytelling", "Community", "Python", "React", "Robotics", "Hardware",
];

pub struct TrackSeed {
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub avg_salary: &'static str,
    pub interests: &'static [&'static str],
}

pub const CAREER_TRACKS: &[TrackSeed] = &[
    TrackSeed {
        title: "Full-Stack Developer",
        emoji: "💻",
        description: "Build and maintain both the frontend and backend of web applications.",
        avg_salary: "$90,000 - $130,000",
        interests: &["Coding", "Frontend", "Backend", "React", "Python", "Tech"],
    },
    TrackSeed {
        title: "AI Engineer",
        emoji: "🤖",
        description: "Design, build, and maintain AI systems and machine learning models.",
        avg_salary: "$100,000 - $150,000",
        interests: &["AI", "Neural Networks", "Python", "Machine Learning", "Tech", "Data"],
    },
    TrackSeed {
        title: "Game Developer",
        emoji: "🎮",
        description: "Create video games for various platforms using programming and design skills.",
        avg_salary: "$70,000 - $110,000",
        interests: &["Games", "Unity", "Unreal Engine", "Coding", "3D Modelling"],
    },
    TrackSeed {
        title: "Startup Founder",
        emoji: "🚀",
        description: "Build and grow a new business from the ground up.",
        avg_salary: "Varies widely",
        interests: &["Startups", "Business", "Marketing", "Tech", "Product", "Public Speaking"],
    },
    TrackSeed {
        title: "Ethical Hacker",
        emoji: "🔐",
        description: "Test systems and networks for vulnerabilities and provide security solutions.",
        avg_salary: "$95,000 - $140,000",
        interests: &["Cybersecurity", "CTF", "Hacking", "Tech"],
    },
    TrackSeed {
        title: "UX Designer",
        emoji: "🎨",
        description: "Focus on creating intuitive and enjoyable user experiences for digital products.",
        avg_salary: "$80,000 - $120,000",
        interests: &["Figma", "Design", "UX/UI", "No Code", "Product"],
    },
    TrackSeed {
        title: "Data Scientist",
        emoji: "📊",
        description: "Analyze complex data to extract insights and inform business decisions.",
        avg_salary: "$100,000 - $145,000",
        interests: &["Data", "Machine Learning", "Python", "Tech"],
    },
    TrackSeed {
        title: "Content Creator",
        emoji: "🎥",
        description: "Produce engaging digital content for platforms like YouTube and blogs.",
        avg_salary: "Varies widely",
        interests: &["YouTube", "Vlogging", "Storytelling", "Public Speaking"],
    },
    TrackSeed {
        title: "Product Manager",
        emoji: "📈",
        description: "Define the vision, strategy, and roadmap for a product.",
        avg_salary: "$90,000 - $150,000",
        interests: &["Product", "Startups", "Tech", "Design", "Marketing"],
    },
    TrackSeed {
        title: "Robotics Engineer",
        emoji: "🤖",
        description: "Design, build, and program robots and robotic systems.",
        avg_salary: "$85,000 - $135,000",
        interests: &["Robotics", "Hardware", "Tech", "Python"],
    },
    TrackSeed {
        title: "Mobile App Developer",
        emoji: "📱",
        description: "Build applications for mobile devices like smartphones and tablets.",
        avg_salary: "$80,000 - $125,000",
        interests: &["Mobile Apps", "Frontend", "Backend", "React", "No Code"],
    },
    TrackSeed {
        title: "Open Source Contributor",
        emoji: "🌐",
        description: "Collaborate on publicly available software projects.",
        avg_salary: "Varies widely",
        interests: &["Open Source", "Coding", "Community", "Tech"],
    },
    TrackSeed {
        title: "Tech YouTuber",
        emoji: "📺",
        description: "Create video content focused on technology topics for YouTube.",
        avg_salary: "Varies widely",
        interests: &["YouTube", "Vlogging", "Tech", "Public Speaking", "Storytelling"],
    },
];

pub struct QuestionSeed {
    pub text: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [&'static str],
    pub tags: &'static [&'static str],
}

pub const ONBOARDING_QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        text: "You enjoy figuring out how things work, even if it takes hours?",
        kind: QuestionKind::YesNo,
        options: &[],
        tags: &["curious", "analytical"],
    },
    QuestionSeed {
        text: "Which environment suits you best?",
        kind: QuestionKind::MultiChoice,
        options: &["Solo and focused", "Collaborative and social", "Flexible and remote", "Hands-on and physical"],
        tags: &["working_style"],
    },
    QuestionSeed {
        text: "You're asked to solve a problem – which approach do you prefer?",
        kind: QuestionKind::MultiChoice,
        options: &["Experiment until it works", "Research and plan thoroughly", "Talk to others and brainstorm", "Draw it out visually"],
        tags: &["problem_solving", "creativity"],
    },
    QuestionSeed {
        text: "Do you enjoy creating content like videos, blogs, or designs?",
        kind: QuestionKind::YesNo,
        options: &[],
        tags: &["creative", "media"],
    },
    QuestionSeed {
        text: "Which excites you more?",
        kind: QuestionKind::MultiChoice,
        options: &["Building something from scratch", "Solving technical puzzles", "Helping others improve", "Exploring unknown areas"],
        tags: &["builder", "analytical", "empathetic", "explorer"],
    },
    QuestionSeed {
        text: "You are more productive when...",
        kind: QuestionKind::MultiChoice,
        options: &["You have a fixed goal and deadline", "You can experiment without rules", "You're part of a team"],
        tags: &["structure", "freedom", "team_player"],
    },
    QuestionSeed {
        text: "Do you like competitive challenges like quizzes or hackathons?",
        kind: QuestionKind::YesNo,
        options: &[],
        tags: &["competitive", "performer"],
    },
    QuestionSeed {
        text: "Rate your comfort with technology (1 to 5)",
        kind: QuestionKind::Scale1To5,
        options: &[],
        tags: &["tech_comfort"],
    },
    QuestionSeed {
        text: "Do you often find yourself trying to understand people's behavior or emotions?",
        kind: QuestionKind::YesNo,
        options: &[],
        tags: &["empathetic", "psychology"],
    },
    QuestionSeed {
        text: "Pick the activity you'd most enjoy this weekend:",
        kind: QuestionKind::MultiChoice,
        options: &["Hiking or travel", "Coding a side project", "Filming a vlog", "Reading something deep"],
        tags: &["adventure", "techie", "creative", "thinker"],
    },
    QuestionSeed {
        text: "Do you enjoy organizing things (files, schedules, ideas)?",
        kind: QuestionKind::YesNo,
        options: &[],
        tags: &["organized", "logical"],
    },
    QuestionSeed {
        text: "Choose a phrase that resonates with you:",
        kind: QuestionKind::MultiChoice,
        options: &["Make it beautiful", "Make it work", "Make it helpful", "Make it fun"],
        tags: &["design_mind", "engineering_mind", "helper", "fun_mind"],
    },
    QuestionSeed {
        text: "Which of these best describes you as a learner?",
        kind: QuestionKind::MultiChoice,
        options: &["Visual - I like seeing diagrams", "Kinesthetic - I learn by doing", "Auditory - I prefer listening", "Reading/Writing - Give me text"],
        tags: &["learning_style"],
    },
    QuestionSeed {
        text: "You'd rather lead a group project than follow instructions?",
        kind: QuestionKind::YesNo,
        options: &[],
        tags: &["leader"],
    },
    QuestionSeed {
        text: "Do you enjoy thinking about the future and predicting trends?",
        kind: QuestionKind::YesNo,
        options: &[],
        tags: &["futurist", "strategic"],
    },
    QuestionSeed {
        text: "Pick what feels like your zone:",
        kind: QuestionKind::MultiChoice,
        options: &["Designing interfaces", "Writing stories/scripts", "Analyzing data", "Running events"],
        tags: &["ui_ux", "storyteller", "data", "event_manager"],
    },
    QuestionSeed {
        text: "Do you like experimenting with visuals or editing tools?",
        kind: QuestionKind::YesNo,
        options: &[],
        tags: &["visual", "editorial"],
    },
    QuestionSeed {
        text: "You're faced with a new app – what do you do first?",
        kind: QuestionKind::MultiChoice,
        options: &["Explore freely and test it", "Read how it works", "Customize settings", "Try to break it!"],
        tags: &["explorer", "researcher", "tinkerer", "tester"],
    },
    QuestionSeed {
        text: "What excites you more?",
        kind: QuestionKind::MultiChoice,
        options: &["Launching your own thing", "Collaborating on something cool", "Cracking a complex challenge", "Being on stage or spotlight"],
        tags: &["entrepreneur", "team_player", "problem_solver", "performer"],
    },
    QuestionSeed {
        text: "How do you handle ambiguity or undefined problems?",
        kind: QuestionKind::MultiChoice,
        options: &["I love it – it's freedom", "I figure it out step-by-step", "I prefer some guidance"],
        tags: &["independent", "adaptive", "structured"],
    },
];

/// Counts of rows created by a seeding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub interests_created: usize,
    pub tracks_created: usize,
    pub starter_pages_created: usize,
    pub questions_created: usize,
}

impl TrackSeed {
    pub fn to_new_track(&self) -> NewCareerTrack {
        NewCareerTrack {
            title: self.title.to_string(),
            slug: None,
            emoji: Some(self.emoji.to_string()),
            description: Some(self.description.to_string()),
            avg_salary: Some(self.avg_salary.to_string()),
            interests: self.interests.iter().map(|s| s.to_string()).collect(),
            roadmap: Vec::new(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Populate interests, career tracks, starter pages and onboarding questions
///
/// When a cache is given the catalog entries are invalidated afterwards.
pub async fn run(postgres: &PostgresClient, cache: Option<&CacheManager>) -> Result<SeedReport, PostgresError> {
    let mut report = SeedReport::default();

    tracing::info!("Populating interests...");
    for name in INTERESTS {
        if postgres.upsert_interest(name, None).await? {
            report.interests_created += 1;
            tracing::debug!("Created interest: {}", name);
        }
    }

    tracing::info!("Populating career tracks and mapping interests...");
    for seed in CAREER_TRACKS {
        let (track, created) = postgres.upsert_career_track(&seed.to_new_track()).await?;
        if created {
            report.tracks_created += 1;
            report.starter_pages_created += 1;
            tracing::debug!("Created career track: {}", track.title);
        }
        tracing::debug!("Mapped {} interests to {}", track.relevant_interests.len(), track.title);
    }

    // Tracks created through the API before seeding may lack pages
    for track in postgres.list_career_tracks().await? {
        if postgres.ensure_starter_page(track.id).await? {
            report.starter_pages_created += 1;
            tracing::info!("Created starter page for {}", track.title);
        }
    }

    tracing::info!("Populating onboarding questions...");
    for question in ONBOARDING_QUESTIONS {
        let options = (!question.options.is_empty()).then(|| to_strings(question.options));
        let created = postgres
            .upsert_onboarding_question(
                question.text,
                question.kind,
                options.as_deref(),
                &to_strings(question.tags),
            )
            .await?;
        if created {
            report.questions_created += 1;
        }
    }

    if let Some(cache) = cache {
        if let Err(e) = cache.invalidate_pattern(CacheKey::CATALOG_PATTERN).await {
            tracing::warn!("Failed to invalidate catalog cache after seeding: {}", e);
        }
    }

    tracing::info!(
        "Seeding complete: {} interests, {} tracks, {} starter pages, {} questions created",
        report.interests_created,
        report.tracks_created,
        report.starter_pages_created,
        report.questions_created
    );

    Ok(report)
}
