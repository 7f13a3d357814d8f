use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Drawing,
    Craft,
    Decoration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub reward: u32,
    pub completed: bool,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gift {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub emoji: String,
    pub purchased: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub level: u32,
    pub total_earned: u32,
    pub tasks_completed: usize,
    pub gifts_owned: usize,
    pub streak: u32,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Calendar,
    Shop,
    Profile,
}

/// Whole-session state: one instance per server process, seeded at startup
/// and never persisted.
#[derive(Debug, Clone)]
pub struct CalendarData {
    pub balance: u32,
    pub opened_days: BTreeSet<u32>,
    pub tasks: Vec<Task>,
    pub gifts: Vec<Gift>,
    pub profile: Profile,
    pub selected_day: Option<u32>,
    pub selected_task: Option<u32>,
    pub view: View,
}

impl CalendarData {
    /// Fixed session seed: 120 snowflakes, days 1-3 already opened, one
    /// task already completed, no gifts purchased.
    pub fn seed() -> Self {
        let tasks = vec![
            Task {
                id: 1,
                title: "Draw a snowman".into(),
                description: "Use crayons or paint to draw a cheerful snowman with a carrot nose."
                    .into(),
                reward: 15,
                completed: false,
                category: Category::Drawing,
            },
            Task {
                id: 2,
                title: "Cut a paper snowflake".into(),
                description:
                    "Fold a sheet of white paper and cut out a snowflake. Every one is unique."
                        .into(),
                reward: 20,
                completed: false,
                category: Category::Craft,
            },
            Task {
                id: 3,
                title: "Decorate a window".into(),
                description:
                    "Stick paper snowflakes on the glass or paint frost patterns with toothpaste."
                        .into(),
                reward: 25,
                completed: true,
                category: Category::Decoration,
            },
            Task {
                id: 4,
                title: "Sculpt a clay fir tree".into(),
                description: "Green clay for the tree, any bright colors for the ornaments.".into(),
                reward: 18,
                completed: false,
                category: Category::Craft,
            },
            Task {
                id: 5,
                title: "Draw a holiday card".into(),
                description: "Make a card for your family with your best winter wishes.".into(),
                reward: 22,
                completed: false,
                category: Category::Drawing,
            },
        ];

        let gifts = vec![
            Gift {
                id: 1,
                name: "Golden star".into(),
                price: 50,
                emoji: "⭐".into(),
                purchased: false,
            },
            Gift {
                id: 2,
                name: "Magic wand".into(),
                price: 80,
                emoji: "🪄".into(),
                purchased: false,
            },
            Gift {
                id: 3,
                name: "Holiday wreath".into(),
                price: 35,
                emoji: "🎄".into(),
                purchased: false,
            },
            Gift {
                id: 4,
                name: "Gift box".into(),
                price: 45,
                emoji: "🎁".into(),
                purchased: false,
            },
            Gift {
                id: 5,
                name: "Festive bell".into(),
                price: 25,
                emoji: "🔔".into(),
                purchased: false,
            },
            Gift {
                id: 6,
                name: "Snow globe".into(),
                price: 60,
                emoji: "🔮".into(),
                purchased: false,
            },
        ];

        let mut data = Self {
            balance: 120,
            opened_days: BTreeSet::from([1, 2, 3]),
            tasks,
            gifts,
            profile: Profile {
                name: "Winter Crafter".into(),
                level: 1,
                total_earned: 120,
                tasks_completed: 0,
                gifts_owned: 0,
                streak: 0,
                achievements: Vec::new(),
            },
            selected_day: None,
            selected_task: None,
            view: View::Calendar,
        };
        crate::store::recompute_profile(&mut data);
        data
    }
}

#[derive(Debug, Deserialize)]
pub struct OpenDayRequest {
    pub day: u32,
}

#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub task_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct GiftRequest {
    pub gift_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: View,
}

/// Full read-only snapshot sent back for every API call.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub current_day: u32,
    pub balance: u32,
    pub opened_days: Vec<u32>,
    pub selected_day: Option<u32>,
    pub selected_task: Option<u32>,
    pub view: View,
    pub tasks: Vec<Task>,
    pub gifts: Vec<Gift>,
    pub profile: Profile,
}
