//! Pre-authored guidance texts per support category.
//!
//! One ordered table; nothing here is computed. The texts are the
//! user-facing half of a classification and must stay in sync with the
//! category set.

use serde::Serialize;

use crate::assessment::Category;

/// A single suggested action shown under an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub title: &'static str,
    pub description: &'static str,
}

/// Static guidance bound to one category.
#[derive(Debug, Clone, Copy)]
pub struct Guidance {
    pub title: &'static str,
    pub observation: &'static str,
    pub suggestions: [Suggestion; 3],
}

/// Guidance table in category order.
pub const GUIDANCE: [(Category, Guidance); 5] = [
    (
        Category::Steady,
        Guidance {
            title: "Thanks for checking in",
            observation: "Thank you for sharing. It seems like you're navigating life's ups and downs, and it's great that you're taking time to check in with yourself. Building emotional awareness is a powerful skill.",
            suggestions: [
                Suggestion {
                    title: "Explore Resilience & Mindfulness",
                    description: "Discover articles on building resilience and mindfulness.",
                },
                Suggestion {
                    title: "Daily Gratitude Journal",
                    description: "Try our daily gratitude journal to focus on the positives.",
                },
                Suggestion {
                    title: "Mood Tracker",
                    description: "Keep track of your mood to notice patterns over time.",
                },
            ],
        },
    ),
    (
        Category::Widespread,
        Guidance {
            title: "We're here with you",
            observation: "Thank you for being so honest. It seems like you're going through a particularly challenging time that might be affecting many parts of your life, from your mood to your energy levels. It's brave of you to share this, and we want you to know that support is available.",
            suggestions: [
                Suggestion {
                    title: "Immediate Support Resources",
                    description: "Your well-being is the top priority. Here are some 24/7 confidential helplines you can connect with right now: 9152987821 (iCall), 080-46110007 (Kiran).",
                },
                Suggestion {
                    title: "Talk to the AI Companion",
                    description: "Our AI companion is ready to listen immediately if you need to talk.",
                },
                Suggestion {
                    title: "Connect with a Professional",
                    description: "Navigating these feelings alone can be very difficult. We strongly encourage you to connect with a mental health professional who can provide the guidance you deserve. Let us help you find the right person.",
                },
            ],
        },
    ),
    (
        Category::MoodSocial,
        Guidance {
            title: "You're not alone",
            observation: "It seems like things might be feeling a bit heavy and lonely lately. It takes courage to acknowledge these feelings. Please know that you are not alone, and many people go through similar experiences.",
            suggestions: [
                Suggestion {
                    title: "AI Companion for Emotional Support",
                    description: "Talk through what's on your mind. Our AI is designed to be an empathetic listener.",
                },
                Suggestion {
                    title: "Positive Affirmations",
                    description: "Start your day with our positive affirmation feature to build self-compassion.",
                },
                Suggestion {
                    title: "Consider Professional Support",
                    description: "If these feelings continue, speaking with a wellness professional can make a big difference. We have a confidential directory of verified counselors you can explore.",
                },
            ],
        },
    ),
    (
        Category::Stress,
        Guidance {
            title: "That's a lot to carry",
            observation: "It sounds like you might be under a lot of pressure right now. Juggling academics, career plans, and expectations is tough, and feeling overwhelmed is a very normal response. Remember to be kind to yourself.",
            suggestions: [
                Suggestion {
                    title: "Stress Management Tools",
                    description: "Explore our guided breathing exercises and meditation techniques to find some calm.",
                },
                Suggestion {
                    title: "Time Management Guides",
                    description: "Check out our resources on how to manage your workload effectively.",
                },
                Suggestion {
                    title: "AI Companion Chat",
                    description: "Sometimes, just typing out your worries can help. Our AI companion is here to listen without judgment.",
                },
            ],
        },
    ),
    (
        Category::Mixed,
        Guidance {
            title: "Thank you for sharing",
            observation: "Thank you for checking in. Your responses suggest you're experiencing a mix of feelings. We're here to support you with resources that can help, one step at a time.",
            suggestions: [
                Suggestion {
                    title: "Mindfulness & Breathing",
                    description: "Try a short breathing practice to reduce stress and reconnect with your body.",
                },
                Suggestion {
                    title: "Track Your Mood",
                    description: "Keep a simple log of your mood and energy to notice patterns and triggers.",
                },
                Suggestion {
                    title: "Reach Out",
                    description: "Consider talking to someone you trust or a professional if things feel heavy.",
                },
            ],
        },
    ),
];

/// Look up the guidance for a category.
pub fn for_category(category: Category) -> &'static Guidance {
    GUIDANCE
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, g)| g)
        .expect("every category has a guidance entry")
}
