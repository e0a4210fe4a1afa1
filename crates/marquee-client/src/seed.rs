//! Seed data for the in-memory catalog

use crate::types::{Movie, Review};
use chrono::{DateTime, NaiveDate, Utc};

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: &str,
    title: &str,
    description: &str,
    genre: &[&str],
    year: i32,
    rating: f64,
    duration: u32,
    director: &str,
    cast: &[&str],
    poster: &str,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        genre: strings(genre),
        year,
        rating,
        duration,
        director: director.to_string(),
        cast: strings(cast),
        poster: poster.to_string(),
        trailer: None,
        featured: false,
        trending: false,
    }
}

pub(crate) fn movies() -> Vec<Movie> {
    vec![
        Movie {
            featured: true,
            trending: true,
            ..movie(
                "1",
                "Dune: Part Two",
                "Paul Atreides unites with Chani and the Fremen while seeking revenge against the conspirators who destroyed his family.",
                &["Sci-Fi", "Adventure", "Drama"],
                2024,
                8.8,
                166,
                "Denis Villeneuve",
                &["Timothée Chalamet", "Zendaya", "Rebecca Ferguson", "Oscar Isaac"],
                "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
            )
        },
        Movie {
            featured: true,
            ..movie(
                "2",
                "Oppenheimer",
                "The story of American scientist J. Robert Oppenheimer and his role in the development of the atomic bomb.",
                &["Biography", "Drama", "History"],
                2023,
                8.4,
                180,
                "Christopher Nolan",
                &["Cillian Murphy", "Emily Blunt", "Matt Damon", "Robert Downey Jr."],
                "https://images.pexels.com/photos/8294547/pexels-photo-8294547.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
            )
        },
        Movie {
            trending: true,
            ..movie(
                "3",
                "The Batman",
                "Batman ventures into Gotham City's underworld when a sadistic killer leaves behind a trail of cryptic clues.",
                &["Action", "Crime", "Drama"],
                2022,
                7.8,
                176,
                "Matt Reeves",
                &["Robert Pattinson", "Zoë Kravitz", "Jeffrey Wright", "Colin Farrell"],
                "https://images.pexels.com/photos/8721342/pexels-photo-8721342.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
            )
        },
        movie(
            "4",
            "Everything Everywhere All at Once",
            "A Chinese-American woman gets swept up in an insane adventure in which she alone can save existence.",
            &["Action", "Adventure", "Comedy"],
            2022,
            7.8,
            139,
            "Daniels",
            &["Michelle Yeoh", "Stephanie Hsu", "Ke Huy Quan", "Jamie Lee Curtis"],
            "https://images.pexels.com/photos/8112186/pexels-photo-8112186.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
        ),
        movie(
            "5",
            "Avatar: The Way of Water",
            "Jake Sully and Ney'tiri have formed a family and are doing everything to stay together.",
            &["Action", "Adventure", "Family"],
            2022,
            7.6,
            192,
            "James Cameron",
            &["Sam Worthington", "Zoe Saldana", "Sigourney Weaver", "Stephen Lang"],
            "https://images.pexels.com/photos/8036647/pexels-photo-8036647.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
        ),
        movie(
            "6",
            "Top Gun: Maverick",
            "After thirty years, Maverick is still pushing the envelope as a top naval aviator.",
            &["Action", "Drama"],
            2022,
            8.3,
            130,
            "Joseph Kosinski",
            &["Tom Cruise", "Miles Teller", "Jennifer Connelly", "Jon Hamm"],
            "https://images.pexels.com/photos/8867482/pexels-photo-8867482.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
        ),
    ]
}

pub(crate) fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: "1".to_string(),
            movie_id: "1".to_string(),
            user_id: "user1".to_string(),
            user_name: "Alex Johnson".to_string(),
            rating: 5,
            comment: "Absolutely stunning visuals and an epic continuation of the Dune saga. Villeneuve delivers once again!".to_string(),
            created_at: utc(2024, 3, 15, 10, 30),
        },
        Review {
            id: "2".to_string(),
            movie_id: "1".to_string(),
            user_id: "user2".to_string(),
            user_name: "Sarah Chen".to_string(),
            rating: 4,
            comment: "Great cinematography and performances. The world-building is incredible."
                .to_string(),
            created_at: utc(2024, 3, 14, 15, 45),
        },
    ]
}
