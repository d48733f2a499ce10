//! Built-in question and rating sets

use mindlog_api::EntryKind;

use crate::{PromptSet, Question};

/// Default number of recent moods in the trend
pub const DEFAULT_MOOD_TREND_DAYS: usize = 14;

const DAILY: &[(&str, &str, &str)] = &[
    ("did", "Today I did...", "What were your main activities?"),
    ("learned", "Today I learned...", "Did you discover something new?"),
    ("good", "One good thing from today", "Focus on a positive moment."),
    ("tomorrow", "Tomorrow's most important task", "What is the priority for tomorrow?"),
];

const WEEKLY: &[(&str, &str, &str)] = &[
    ("well", "What went well this week?", "Reflect on successes..."),
    ("notWell", "What didn't go well?", "Be honest but kind to yourself..."),
    ("learned", "What did I learn?", "New skills or realizations?"),
    ("distraction", "Biggest distraction this week", "What took your focus away?"),
    ("win", "Biggest win of the week", "Highlight your best moment."),
    ("priorities", "Top 3 priorities for next week", "1. ...\n2. ...\n3. ..."),
];

const MONTHLY: &[(&str, &str, &str)] = &[
    ("focus", "Areas I focused on (skill, health, money, mind)", "Where did your energy go?"),
    ("wins", "Top 5 wins of the month", "Celebrate your progress..."),
    ("mistakes", "Biggest mistakes or weak areas", "Growth opportunities..."),
    ("lessons", "Lessons learned about myself", "Self-discovery highlights..."),
    ("distractions", "Distractions and time-wasters", "What to avoid next month?"),
    ("goals", "Top 3 goals for next month", "Strategic focus for next month..."),
    ("habits", "Non-negotiable habits for next month", "What will you stick to?"),
    ("message", "One message to myself", "A kind note for the future you..."),
];

const YEARLY: &[(&str, &str, &str)] = &[
    ("starting", "Starting point of the year", "Career, money, health, mindset at Jan 1st..."),
    ("achievements", "Achievements (big and small)", "List what you are proud of..."),
    ("memories", "Top 10 memories", "Moments you want to cherish..."),
    ("struggles", "Biggest struggles and how they were handled", "Your resilience in action..."),
    ("mistakes", "Biggest mistakes and lessons", "Turning points..."),
    ("strengths", "Strengths discovered", "What did you find out you are good at?"),
    ("weaknesses", "Weaknesses noticed", "Areas needing support..."),
    ("patterns", "Patterns in behavior", "Things you noticed repeating..."),
    ("letGo", "Things to let go", "Habits, people, thoughts to leave behind..."),
    ("intentions", "Intentions for next year", "The theme for your next year..."),
    ("letter", "A long letter to future self", "Write your heart out..."),
];

/// The built-in prompts for a kind
pub fn builtin_prompts(kind: EntryKind) -> PromptSet {
    let (questions, ratings): (&[(&str, &str, &str)], &[&str]) = match kind {
        EntryKind::Daily => (DAILY, &[]),
        EntryKind::Weekly => (WEEKLY, &["Effort", "Discipline", "Mindset"]),
        EntryKind::Monthly => (MONTHLY, &["Discipline", "Focus", "Happiness", "Consistency"]),
        EntryKind::Yearly => (YEARLY, &[]),
    };

    PromptSet {
        questions: questions
            .iter()
            .map(|(id, label, placeholder)| Question {
                id: (*id).to_string(),
                label: (*label).to_string(),
                placeholder: Some((*placeholder).to_string()),
            })
            .collect(),
        ratings: ratings.iter().map(|r| (*r).to_string()).collect(),
    }
}
