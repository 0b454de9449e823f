//! Venue types

use serde::{Deserialize, Serialize};

/// A location that can host shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    /// Ordered set: no duplicates, submission order kept
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Every mutable venue field, as written by create and edit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Attach an id to a submitted input
    pub fn from_input(id: i64, input: VenueInput) -> Self {
        Self {
            id,
            name: input.name,
            city: input.city,
            state: input.state,
            address: input.address,
            phone: input.phone,
            image_link: input.image_link,
            facebook_link: input.facebook_link,
            website_link: input.website_link,
            genres: input.genres,
            seeking_talent: input.seeking_talent,
            seeking_description: input.seeking_description,
        }
    }

    /// The editable fields of this venue, used to prefill the edit form
    pub fn to_input(&self) -> VenueInput {
        VenueInput {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            image_link: self.image_link.clone(),
            facebook_link: self.facebook_link.clone(),
            website_link: self.website_link.clone(),
            genres: self.genres.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        }
    }
}
