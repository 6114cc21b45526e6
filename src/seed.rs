//! Startup sample data: the built-in posts and category list, and the demo
//! account written on a first run with no user store on disk.

use crate::{auth, models::{BlogPost, User}};
use dashmap::DashMap;

pub const DEMO_EMAIL: &str = "demo@blogx.com";
pub const DEMO_PASSWORD: &str = "secret";

pub fn seed_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "Building the Future with AI".to_string(),
            slug: "building-future-with-ai".to_string(),
            excerpt: "Exploring how artificial intelligence is reshaping the way we build \
                      software and create digital experiences."
                .to_string(),
            content: "# Building the Future with AI\n\nArtificial Intelligence is no longer a \
                      distant dream. It's here, and it's transforming everything we know about \
                      software development.\n\n## The Revolution is Now\n\nFrom code generation \
                      to automated testing, AI is becoming an integral part of the development \
                      workflow."
                .to_string(),
            author: "Tech Explorer".to_string(),
            published_at: "2024-01-15".to_string(),
            read_time: "5 min read".to_string(),
            category: "Technology".to_string(),
            tags: vec!["AI".to_string(), "Development".to_string(), "Future".to_string()],
            image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=400&fit=crop"
                .to_string(),
            views: 1250,
            comments: Vec::new(),
        },
        BlogPost {
            id: 2,
            title: "Modern Web Development Best Practices".to_string(),
            slug: "modern-web-development-best-practices".to_string(),
            excerpt: "Essential practices every web developer should follow in 2024 to build \
                      scalable and robust applications."
                .to_string(),
            content: "# Modern Web Development Best Practices\n\nWeb development has evolved \
                      significantly over the past few years. Here are the essential practices \
                      you should follow in 2024."
                .to_string(),
            author: "Code Master".to_string(),
            published_at: "2024-01-12".to_string(),
            read_time: "8 min read".to_string(),
            category: "Web Development".to_string(),
            tags: vec![
                "Best Practices".to_string(),
                "Performance".to_string(),
                "Security".to_string(),
            ],
            image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=800&h=400&fit=crop"
                .to_string(),
            views: 890,
            comments: Vec::new(),
        },
    ]
}

pub fn seed_categories() -> Vec<String> {
    [
        "All",
        "Technology",
        "Web Development",
        "3D Graphics",
        "Cybersecurity",
        "AI & Machine Learning",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn seed_users() -> DashMap<String, User> {
    let demo = User {
        id: 1,
        email: DEMO_EMAIL.to_string(),
        first_name: "Demo".to_string(),
        last_name: "User".to_string(),
        hashed_password: auth::hash_password(DEMO_PASSWORD)
            .expect("Failed to hash demo password"),
        phone: Some("+1 555 123 4567".to_string()),
        avatar: None,
        join_date: "2024-01-01T00:00:00".to_string(),
        is_active: true,
    };

    let users = DashMap::new();
    users.insert(demo.email.clone(), demo);
    users
}
