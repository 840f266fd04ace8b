use serde::{Deserialize, Serialize};

use crate::error::RoundError;

pub type TeeId = String;
pub type CourseId = String;

pub const DEFAULT_HOLE_PAR: i32 = 4;
pub const DEFAULT_HOLE_RANK: i32 = 1;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tee {
    pub id: TeeId,
    pub name: String,
    pub rating: f64,
    pub slope: i32,
    pub pars: Vec<i32>,
    /// Stroke allocation rank per hole, 1 is the hardest.
    pub handicaps: Vec<i32>,
}

impl Tee {
    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.pars.iter().sum()
    }

    /// Par for a 1-based hole, 4 when the table has no entry.
    #[must_use]
    pub fn hole_par(&self, hole: u32) -> i32 {
        hole_index(hole)
            .and_then(|i| self.pars.get(i).copied())
            .filter(|par| *par != 0)
            .unwrap_or(DEFAULT_HOLE_PAR)
    }

    /// Stroke allocation rank for a 1-based hole, 1 when the table has no entry.
    #[must_use]
    pub fn hole_rank(&self, hole: u32) -> i32 {
        hole_index(hole)
            .and_then(|i| self.handicaps.get(i).copied())
            .filter(|rank| *rank != 0)
            .unwrap_or(DEFAULT_HOLE_RANK)
    }

    /// Checks the per-hole tables against `total_holes`.
    ///
    /// # Errors
    /// Returns `RoundError::InvalidTee` if either table has the wrong length or the
    /// stroke ranks are not a permutation of `1..=total_holes`.
    pub fn validate(&self, total_holes: u32) -> Result<(), RoundError> {
        let expected = total_holes as usize;
        if self.pars.len() != expected {
            return Err(RoundError::InvalidTee(format!(
                "{}: expected {expected} pars, found {}",
                self.id,
                self.pars.len()
            )));
        }
        if self.handicaps.len() != expected {
            return Err(RoundError::InvalidTee(format!(
                "{}: expected {expected} stroke ranks, found {}",
                self.id,
                self.handicaps.len()
            )));
        }
        let mut ranks = self.handicaps.clone();
        ranks.sort_unstable();
        let is_permutation = ranks
            .iter()
            .enumerate()
            .all(|(i, rank)| i64::from(*rank) == i as i64 + 1);
        if !is_permutation {
            return Err(RoundError::InvalidTee(format!(
                "{}: stroke ranks must be a permutation of 1..={total_holes}",
                self.id
            )));
        }
        Ok(())
    }
}

fn hole_index(hole: u32) -> Option<usize> {
    (hole as usize).checked_sub(1)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub tees: Vec<Tee>,
}

impl Course {
    /// Looks up a tee, falling back to the first tee of the course.
    #[must_use]
    pub fn tee_or_default(&self, tee_id: &str) -> Option<&Tee> {
        self.tees
            .iter()
            .find(|t| t.id == tee_id)
            .or_else(|| self.tees.first())
    }

    /// # Errors
    /// Returns `RoundError::InvalidTee` if the course has no tees or any tee fails
    /// [`Tee::validate`].
    pub fn validate(&self, total_holes: u32) -> Result<(), RoundError> {
        if self.tees.is_empty() {
            return Err(RoundError::InvalidTee(format!(
                "course {} has no tees",
                self.id
            )));
        }
        for tee in &self.tees {
            tee.validate(total_holes)?;
        }
        Ok(())
    }
}

#[must_use]
pub fn find_course<'a>(courses: &'a [Course], course_id: &str) -> Option<&'a Course> {
    courses.iter().find(|c| c.id == course_id)
}

const PINE_VALLEY_PARS: [i32; 18] = [4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 3, 4, 4, 3, 5, 4, 4, 5];
const PINE_VALLEY_RANKS: [i32; 18] = [7, 17, 15, 1, 9, 11, 5, 13, 3, 8, 16, 2, 10, 18, 6, 12, 4, 14];
const AUGUSTA_PARS: [i32; 18] = [4, 5, 4, 3, 4, 3, 4, 5, 4, 4, 4, 3, 5, 4, 5, 3, 4, 4];
const AUGUSTA_RANKS: [i32; 18] = [4, 10, 2, 14, 6, 16, 8, 12, 1, 5, 3, 18, 11, 7, 9, 17, 13, 15];

fn tee(id: &str, name: &str, rating: f64, slope: i32, pars: &[i32], ranks: &[i32]) -> Tee {
    Tee {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        slope,
        pars: pars.to_vec(),
        handicaps: ranks.to_vec(),
    }
}

/// Built-in course catalogue the store starts with.
#[must_use]
pub fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            id: "course1".to_string(),
            name: "Pine Valley Golf Club".to_string(),
            tees: vec![
                tee("tee1", "Championship", 74.8, 155, &PINE_VALLEY_PARS, &PINE_VALLEY_RANKS),
                tee("tee2", "Regular", 72.4, 145, &PINE_VALLEY_PARS, &PINE_VALLEY_RANKS),
                tee("tee3", "Forward", 70.1, 135, &PINE_VALLEY_PARS, &PINE_VALLEY_RANKS),
            ],
        },
        Course {
            id: "course2".to_string(),
            name: "Augusta National".to_string(),
            tees: vec![
                tee("tee4", "Masters", 76.2, 148, &AUGUSTA_PARS, &AUGUSTA_RANKS),
                tee("tee5", "Tournament", 74.2, 140, &AUGUSTA_PARS, &AUGUSTA_RANKS),
            ],
        },
    ]
}
