//! Text rendering of a profile card.

use std::io::{self, Write};

use crate::model::Profile;

/// Which side of the card is showing.
///
/// Purely presentational: owned by the review loop, reset whenever the
/// cursor moves, never stored in the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardView {
    flipped: bool,
}

impl CardView {
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn render<W: Write>(&self, profile: &Profile, position: (usize, usize), out: &mut W) -> io::Result<()> {
        let (index, total) = position;
        writeln!(out)?;
        writeln!(out, "[{}/{}] {}", index + 1, total, profile.headline())?;

        if self.flipped {
            writeln!(out, "  About: {}", if profile.bio.is_empty() { "-" } else { profile.bio.as_str() })?;
            if !profile.tags.is_empty() {
                writeln!(out, "  Interests: {}", profile.tags.join(", "))?;
            }
        } else {
            writeln!(out, "  Photo: {}", profile.image_url)?;
            if !profile.tags.is_empty() {
                writeln!(out, "  #{}", profile.tags.join(" #"))?;
            }
        }
        Ok(())
    }
}
