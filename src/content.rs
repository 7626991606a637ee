//! Static wellness content and dashboard derivations.
//!
//! The article catalog, motivational quotes, and helpline directory are
//! fixed editorial data; the functions below derive dashboard numbers from
//! stored check-ins.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::store::CheckinEntry;

/// One editorial article.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Article {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub author: &'static str,
}

/// Article categories, in display order. `All` is a UI concern, not a
/// category.
pub const CATEGORIES: [&str; 6] = [
    "Mental Health Basics",
    "Mindfulness & Meditation",
    "Student Life",
    "Family & Relationships",
    "Awareness & Advocacy",
    "Self-Care",
];

/// The editorial catalog.
pub const ARTICLES: [Article; 6] = [
    Article {
        id: "1",
        title: "Understanding Anxiety in Indian Youth",
        description: "Learn about the common signs of anxiety and how cultural factors in India can influence mental health experiences.",
        content: "Anxiety is one of the most common mental health challenges faced by young people in India today. With increasing academic pressure, career uncertainties, and social expectations, it's important to recognize the signs and seek appropriate help. This article explores culturally sensitive approaches to managing anxiety, including traditional practices like yoga and meditation alongside modern therapeutic techniques.",
        category: "Mental Health Basics",
        read_time: "5 min read",
        author: "Dr. Priya Sharma",
    },
    Article {
        id: "2",
        title: "Building Resilience Through Mindfulness",
        description: "Discover practical mindfulness techniques rooted in Indian traditions that can help build emotional resilience.",
        content: "Mindfulness, deeply rooted in Indian philosophy and practices, offers powerful tools for building emotional resilience. This article explores how to integrate ancient practices like pranayama (breathing exercises), dhyana (meditation), and mindful awareness into daily life to manage stress, improve focus, and enhance overall well-being. Learn practical techniques that you can start implementing today.",
        category: "Mindfulness & Meditation",
        read_time: "7 min read",
        author: "Swami Ananda",
    },
    Article {
        id: "3",
        title: "Dealing with Academic Pressure",
        description: "Strategies for managing the intense academic expectations common in Indian educational systems.",
        content: "The Indian education system is known for its competitive nature, which can create significant stress for students. This article provides practical strategies for managing academic pressure, including time management techniques, stress reduction methods, and ways to maintain a healthy work-life balance. Learn how to excel academically while preserving your mental health.",
        category: "Student Life",
        read_time: "6 min read",
        author: "Prof. Rajesh Kumar",
    },
    Article {
        id: "4",
        title: "Family Dynamics and Mental Health",
        description: "Navigating family expectations while maintaining your mental well-being in Indian cultural contexts.",
        content: "Family plays a central role in Indian culture, but sometimes family expectations can create stress and conflict. This article explores how to maintain healthy boundaries, communicate effectively with family members about mental health, and balance respect for tradition with personal well-being. Learn strategies for having difficult conversations and building understanding.",
        category: "Family & Relationships",
        read_time: "8 min read",
        author: "Dr. Meera Nair",
    },
    Article {
        id: "5",
        title: "Breaking the Stigma Around Mental Health",
        description: "Understanding and addressing mental health stigma in Indian society.",
        content: "Mental health stigma remains a significant barrier to seeking help in Indian society. This article examines the roots of this stigma, its impact on individuals and families, and practical ways to challenge misconceptions. Learn how to advocate for mental health awareness in your community and support others who may be struggling.",
        category: "Awareness & Advocacy",
        read_time: "6 min read",
        author: "Dr. Arjun Patel",
    },
    Article {
        id: "6",
        title: "Self-Care Practices for Daily Life",
        description: "Simple, culturally relevant self-care practices that can be easily integrated into your routine.",
        content: "Self-care isn't selfish - it's essential for maintaining good mental health. This article presents practical self-care strategies that align with Indian values and lifestyle, including morning routines inspired by Ayurveda, the importance of community connection, and simple practices like journaling and gratitude that can make a significant difference in your daily well-being.",
        category: "Self-Care",
        read_time: "5 min read",
        author: "Dr. Kavya Reddy",
    },
];

/// A confidential helpline entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Helpline {
    pub name: &'static str,
    pub phone: &'static str,
    pub available: &'static str,
}

/// 24/7 and daytime emergency helplines shown in the crisis modal.
pub const HELPLINES: [Helpline; 4] = [
    Helpline {
        name: "Sneha Foundation",
        phone: "+91-44-2464-0050",
        available: "24/7",
    },
    Helpline {
        name: "Aasra",
        phone: "+91-22-2754-6669",
        available: "24/7",
    },
    Helpline {
        name: "iCall",
        phone: "+91-22-2556-3291",
        available: "10 AM - 8 PM",
    },
    Helpline {
        name: "Vandrevala Foundation",
        phone: "+91-99996-66555",
        available: "24/7",
    },
];

/// Motivational quotes rotated daily.
pub const MOTIVATION_QUOTES: [&str; 10] = [
    "Small steps every day lead to big changes.",
    "Your feelings are valid. It's okay to take it slow.",
    "Breathe. You've handled hard things before.",
    "Progress, not perfection.",
    "Rest is productive.",
    "You are not your thoughts; you are the observer of them.",
    "One day at a time.",
    "Self-kindness is a superpower.",
    "Asking for help is a sign of strength.",
    "You're doing better than you think.",
];

/// The articles in one category, or the whole catalog when `category` is
/// absent or `"All"`.
pub fn articles_in(category: Option<&str>) -> Vec<&'static Article> {
    match category {
        None | Some("All") => ARTICLES.iter().collect(),
        Some(wanted) => ARTICLES.iter().filter(|a| a.category == wanted).collect(),
    }
}

/// Quote for a given date. Rotation is keyed on the day number so every
/// user sees the same quote on the same day.
pub fn quote_of_the_day(date: NaiveDate) -> &'static str {
    let day_index = date.num_days_from_ce() as usize;
    MOTIVATION_QUOTES[day_index % MOTIVATION_QUOTES.len()]
}

/// Average mood across entries, rounded to the nearest integer. Zero when
/// there are no entries.
pub fn mood_average(entries: &[CheckinEntry]) -> u8 {
    if entries.is_empty() {
        return 0;
    }
    let sum: u32 = entries.iter().map(|e| e.mood as u32).sum();
    ((sum as f64 / entries.len() as f64).round()) as u8
}

/// Consecutive-day check-in streak ending at `today`.
///
/// Counts backwards from `today` while an entry exists for each day; a
/// missing entry for today means the streak is zero.
pub fn checkin_streak(entries: &[CheckinEntry], today: NaiveDate) -> u32 {
    let dates: std::collections::HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
    let mut streak = 0;
    let mut day = today;
    while dates.contains(&day) {
        streak += 1;
        day = match day.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }
    streak
}
