//! Artist form

use super::rules::{self, MAX_IMAGE_LINK, MAX_TEXT};
use super::{non_blank, FieldErrors, FormData};
use marquee_types::ArtistInput;

/// Raw artist submission, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            phone: data.text("phone"),
            genres: data.all("genres").into_iter().map(str::to_string).collect(),
            image_link: data.text("image_link"),
            facebook_link: data.text("facebook_link"),
            website_link: data.text("website_link"),
            seeking_venue: data.checked("seeking_venue"),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn from_input(input: &ArtistInput) -> Self {
        Self {
            name: input.name.clone(),
            city: input.city.clone(),
            state: input.state.clone(),
            phone: input.phone.clone(),
            genres: input.genres.clone(),
            image_link: input.image_link.clone().unwrap_or_default(),
            facebook_link: input.facebook_link.clone().unwrap_or_default(),
            website_link: input.website_link.clone().unwrap_or_default(),
            seeking_venue: input.seeking_venue,
            seeking_description: input.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ArtistInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        rules::required(&mut errors, "name", &self.name);
        rules::max_len(&mut errors, "name", &self.name, MAX_TEXT);
        rules::required(&mut errors, "city", &self.city);
        rules::max_len(&mut errors, "city", &self.city, MAX_TEXT);
        rules::required(&mut errors, "state", &self.state);
        rules::state(&mut errors, "state", &self.state);
        rules::required(&mut errors, "phone", &self.phone);
        rules::max_len(&mut errors, "phone", &self.phone, MAX_TEXT);
        rules::phone(&mut errors, "phone", &self.phone);
        rules::link(&mut errors, "image_link", &self.image_link, MAX_IMAGE_LINK);
        rules::link(&mut errors, "facebook_link", &self.facebook_link, MAX_TEXT);
        rules::link(&mut errors, "website_link", &self.website_link, MAX_TEXT);
        let genre_refs: Vec<&str> = self.genres.iter().map(String::as_str).collect();
        let genres = rules::genres(&mut errors, "genres", &genre_refs);

        errors.into_result(ArtistInput {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: self.phone.trim().to_string(),
            genres,
            image_link: non_blank(&self.image_link),
            facebook_link: non_blank(&self.facebook_link),
            website_link: non_blank(&self.website_link),
            seeking_venue: self.seeking_venue,
            seeking_description: non_blank(&self.seeking_description),
        })
    }
}
