//! Terminal rendering of the listing surface.

use prenza_core::board::{Card, Rendering};
use prenza_core::error::FieldError;

pub fn header() {
    println!("Welcome to Priza");
    println!("Here are some of my blog contents");
    println!();
}

/// Render what the board says the surface should show: the error message
/// with its retry hint, placeholder cards while pending, or the cards.
pub fn listing(rendering: &Rendering) {
    match rendering {
        Rendering::Failed { message } => {
            println!("{message}");
        }
        Rendering::Skeletons { count } => {
            for _ in 0..*count {
                skeleton();
            }
        }
        Rendering::Cards(cards) => {
            for card in cards {
                self::card(card);
            }
        }
    }
}

fn skeleton() {
    println!("┌──────────────────────────────┐");
    println!("│ ░░░░░░░░░░░░░░░░             │");
    println!("│ ░░░░░░░░░░░░░░░░░░░░░░░░░░░░ │");
    println!("│                  ░░░░░░░░░░░ │");
    println!("└──────────────────────────────┘");
}

fn card(card: &Card) {
    println!("── {} ", card.title);
    if let Some(cover) = &card.cover_image {
        println!("   cover: {cover}");
    }
    println!("   {}", card.content);
    println!("   By {}   (id: {})", card.author, card.id);
    println!();
}

/// Inline field messages for a blocked submission.
pub fn field_errors(errors: &[FieldError]) {
    for error in errors {
        eprintln!("{}: {}", error.field, error.message);
    }
}
