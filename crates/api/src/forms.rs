//! Typed form submissions for the add-entity pages.
//!
//! Each form deserializes the urlencoded body with every field optional,
//! then converts into the matching create DTO by applying the rules in
//! [`lore_core::forms`]. Unknown fields are ignored.

use lore_core::error::CoreError;
use lore_core::forms::{optional, optional_int, required};
use lore_db::models::article::CreateArticle;
use lore_db::models::character::CreateCharacter;
use lore_db::models::place::CreatePlace;
use serde::Deserialize;

/// Body of `POST /add_article`.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<ArticleForm> for CreateArticle {
    fn from(form: ArticleForm) -> Self {
        Self {
            title: required(form.title),
            content: required(form.content),
        }
    }
}

/// Body of `POST /add_character`.
#[derive(Debug, Default, Deserialize)]
pub struct CharacterForm {
    pub name: Option<String>,
    pub quote: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub full_name: Option<String>,
    pub origin: Option<String>,
    pub religion: Option<String>,
    pub appearance: Option<String>,
    pub personality: Option<String>,
    pub history: Option<String>,
    pub first_appearance: Option<String>,
    pub image: Option<String>,
}

impl TryFrom<CharacterForm> for CreateCharacter {
    type Error = CoreError;

    fn try_from(form: CharacterForm) -> Result<Self, Self::Error> {
        let age = optional_int("age", form.age.as_deref())?;

        Ok(Self {
            name: required(form.name),
            quote: optional(form.quote),
            gender: required(form.gender),
            age,
            full_name: optional(form.full_name),
            origin: required(form.origin),
            religion: required(form.religion),
            appearance: optional(form.appearance),
            personality: optional(form.personality),
            history: optional(form.history),
            first_appearance: optional(form.first_appearance),
            image: optional(form.image),
        })
    }
}

/// Body of `POST /add_place`.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceForm {
    pub name: Option<String>,
    pub quote: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub first_appearance: Option<String>,
    pub description: Option<String>,
    pub history: Option<String>,
}

impl From<PlaceForm> for CreatePlace {
    fn from(form: PlaceForm) -> Self {
        Self {
            name: required(form.name),
            quote: optional(form.quote),
            image: optional(form.image),
            location: required(form.location),
            first_appearance: optional(form.first_appearance),
            description: optional(form.description),
            history: optional(form.history),
        }
    }
}
