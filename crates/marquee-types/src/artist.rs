//! Artist types

use serde::{Deserialize, Serialize};

/// A performer that can be booked for shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    /// Unique across all artists
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Every mutable artist field, as written by create and edit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl Artist {
    pub fn from_input(id: i64, input: ArtistInput) -> Self {
        Self {
            id,
            name: input.name,
            city: input.city,
            state: input.state,
            phone: input.phone,
            genres: input.genres,
            image_link: input.image_link,
            facebook_link: input.facebook_link,
            website_link: input.website_link,
            seeking_venue: input.seeking_venue,
            seeking_description: input.seeking_description,
        }
    }

    pub fn to_input(&self) -> ArtistInput {
        ArtistInput {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: self.genres.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// Id and name only, as used by the artist index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}
