//! Movie record type and the seed collection.

use serde::{Deserialize, Serialize};

/// A single movie record.
///
/// `id` is caller-assigned and is the sole lookup key. Uniqueness is not
/// enforced on create; lookups return the first match in collection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Caller-assigned identifier
    pub id: i64,
    pub title: String,
    pub director: String,
    /// Release date as opaque `YYYY-MM-DD` text (not validated as a calendar date)
    pub release_date: String,
    pub rating: f64,
    pub description: String,
    pub poster_url: String,
}

/// Returns the fixed seed collection loaded at process start.
pub fn seed_movies() -> Vec<Movie> {
    fn movie(
        id: i64,
        title: &str,
        director: &str,
        release_date: &str,
        rating: f64,
        description: &str,
        poster_url: &str,
    ) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            director: director.to_string(),
            release_date: release_date.to_string(),
            rating,
            description: description.to_string(),
            poster_url: poster_url.to_string(),
        }
    }

    vec![
        movie(
            1,
            "Interstellar",
            "Christopher Nolan",
            "2014-11-07",
            8.6,
            "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            "https://m.media-amazon.com/images/M/MV5BZjdkOTU3MDktN2IxOS00OGEyLWFmMjktY2FiMmZkNWIyODZiXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_.jpg",
        ),
        movie(
            2,
            "Inception",
            "Christopher Nolan",
            "2010-07-16",
            9.3,
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
            "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_.jpg",
        ),
        movie(
            3,
            "The Shawshank Redemption",
            "Frank Darabont",
            "1994-09-23",
            9.3,
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            "https://m.media-amazon.com/images/M/MV5BMDFkYTc0MGEtZmNhMC00ZDIzLWFmNTEtODM1ZmRlYWMwMWFmXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_.jpg",
        ),
        movie(
            4,
            "The Godfather",
            "Francis Ford Coppola",
            "1972-03-24",
            9.2,
            "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
            "https://m.media-amazon.com/images/M/MV5BM2MyNjYxNmUtYTAwNi00MTYxLWJmNWYtYzZlODY3ZTk3OTFlXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_.jpg",
        ),
        movie(
            5,
            "Pulp Fiction",
            "Quentin Tarantino",
            "1994-10-14",
            8.9,
            "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
            "https://m.media-amazon.com/images/M/MV5BNGNhMDIzZTUtNTBlZi00MTRlLWFjM2ItYzViMjE3YzI5MjljXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_.jpg",
        ),
        movie(
            6,
            "The Dark Knight",
            "Christopher Nolan",
            "2008-07-18",
            9.0,
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
            "https://m.media-amazon.com/images/M/MV5BMTMxNTMwODM0NF5BMl5BanBnXkFtZTcwODAyMTk2Mw@@._V1_.jpg",
        ),
        movie(
            7,
            "Fight Club",
            "David Fincher",
            "1999-10-15",
            8.8,
            "An insomniac office worker and a devil-may-care soap maker form an underground fight club that evolves into much more.",
            "https://m.media-amazon.com/images/M/MV5BMmEzNTkxYjQtZTc0MC00YTVjLTg5ZTEtZWMwOWVlYzY0NWIwXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_.jpg",
        ),
        movie(
            8,
            "The Matrix",
            "Lana and Lilly Wachowski",
            "1999-03-31",
            8.7,
            "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
            "https://m.media-amazon.com/images/M/MV5BNzQzOTk3OTAtNDQ0Zi00ZTVkLWI0MTEtMDllZjNkYzNjNTc4L2ltYWdlXkEyXkFqcGdeQXVyNjU0OTQ0OTY@._V1_.jpg",
        ),
        movie(
            9,
            "Goodfellas",
            "Martin Scorsese",
            "1990-09-19",
            8.7,
            "The story of Henry Hill and his life in the mob, covering his relationship with his wife Karen Hill and his mob partners Jimmy Conway and Tommy DeVito.",
            "https://m.media-amazon.com/images/M/MV5BY2NkZjEzMDgtN2RjYy00YzM1LWI4ZmQtMjIwYjFjNmI3ZGEwXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_.jpg",
        ),
        movie(
            10,
            "Parasite",
            "Bong Joon Ho",
            "2019-10-11",
            8.6,
            "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.",
            "https://m.media-amazon.com/images/M/MV5BYWZjMjk3ZTItODQ2ZC00NTY5LWE0ZDYtZTI3MjcwN2Q5NTVkXkEyXkFqcGdeQXVyODk4OTc3MTY@._V1_.jpg",
        ),
        movie(
            11,
            "The Lord of the Rings: The Fellowship of the Ring",
            "Peter Jackson",
            "2001-12-19",
            8.8,
            "A meek Hobbit from the Shire and eight companions set out on a journey to destroy the powerful One Ring and save Middle-earth from the Dark Lord Sauron.",
            "https://m.media-amazon.com/images/M/MV5BN2EyZjM3NzUtNWUzMi00MTgxLWI0NTctMzY4M2VlOTdjZWRiXkEyXkFqcGdeQXVyNDUzOTQ5MjY@._V1_.jpg",
        ),
        movie(
            12,
            "Forrest Gump",
            "Robert Zemeckis",
            "1994-07-06",
            8.8,
            "The presidencies of Kennedy and Johnson, the Vietnam War, the Watergate scandal and other historical events unfold from the perspective of an Alabama man with an IQ of 75.",
            "https://m.media-amazon.com/images/M/MV5BNWIwODRlZTUtY2U3ZS00Yzg1LWJhNzYtMmZiYmEyNmU1NjMzXkEyXkFqcGdeQXVyMTQxNzMzNDI@._V1_.jpg",
        ),
    ]
}
