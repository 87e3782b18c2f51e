use std::fmt::{Debug, Display, Error, Formatter};

use colored::Colorize;

use super::{Board, Move};

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.label())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for row in self.tiles().iter() {
            for &tile in row.iter() {
                if tile == 0 {
                    write!(f, " {} ", "·".bright_white().on_black())?;
                } else {
                    write!(f, " {} ", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_struct("Board")
            .field("tiles", self.tiles())
            .field("blank", &self.blank())
            .finish()
    }
}
