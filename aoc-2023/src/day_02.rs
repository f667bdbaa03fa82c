//! Day 2: Cube Conundrum

use crate::utils::parse::parse_lines;
use anyhow::{Context, anyhow, bail};
use aoc_solver::{Answer, AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["2023"])]
pub struct Day02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

impl Colour {
    /// Most cubes of this colour the bag holds in part 1
    pub fn limit(self) -> u32 {
        match self {
            Colour::Red => 12,
            Colour::Green => 13,
            Colour::Blue => 14,
        }
    }
}

impl FromStr for Colour {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Colour::Red),
            "green" => Ok(Colour::Green),
            "blue" => Ok(Colour::Blue),
            other => bail!("unknown colour {other:?}"),
        }
    }
}

/// Cube counts shown in one handful, by colour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Draw {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Draw {
    fn count_mut(&mut self, colour: Colour) -> &mut u32 {
        match colour {
            Colour::Red => &mut self.red,
            Colour::Green => &mut self.green,
            Colour::Blue => &mut self.blue,
        }
    }

    pub fn count(&self, colour: Colour) -> u32 {
        match colour {
            Colour::Red => self.red,
            Colour::Green => self.green,
            Colour::Blue => self.blue,
        }
    }

    pub fn within_limits(&self) -> bool {
        [Colour::Red, Colour::Green, Colour::Blue]
            .into_iter()
            .all(|colour| self.count(colour) <= colour.limit())
    }

    fn max(self, other: Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }
}

impl FromStr for Draw {
    type Err = anyhow::Error;

    /// `3 blue, 4 red`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut draw = Draw::default();
        for part in s.split(',') {
            let (count, colour) = part
                .trim()
                .split_once(' ')
                .ok_or_else(|| anyhow!("expected \"<count> <colour>\", got {:?}", part.trim()))?;
            let count: u32 = count
                .parse()
                .with_context(|| format!("invalid cube count {count:?}"))?;
            let total = draw.count_mut(colour.trim().parse()?);
            *total = total
                .checked_add(count)
                .ok_or_else(|| anyhow!("{colour} cube count overflows"))?;
        }
        Ok(draw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<Draw>,
}

impl Game {
    /// Fewest cubes of each colour that make every draw possible
    pub fn minimum_bag(&self) -> Draw {
        self.draws.iter().copied().fold(Draw::default(), Draw::max)
    }

    /// Product of the minimum bag's counts, `None` on overflow
    pub fn power(&self) -> Option<Answer> {
        let bag = self.minimum_bag();
        Answer::from(bag.red)
            .checked_mul(Answer::from(bag.green))?
            .checked_mul(Answer::from(bag.blue))
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (label, draws) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("missing ':' after game label"))?;
        let id = label
            .trim()
            .strip_prefix("Game ")
            .ok_or_else(|| anyhow!("expected \"Game <id>\", got {label:?}"))?
            .parse::<u32>()
            .with_context(|| format!("invalid game id in {label:?}"))?;
        let draws = draws
            .split(';')
            .map(|draw| draw.parse::<Draw>())
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { id, draws })
    }
}

impl AocParser for Day02 {
    type Parsed = Vec<Game>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input, |line| line.parse::<Game>())
    }
}

impl PartSolver<1> for Day02 {
    fn solve(games: &Self::Parsed) -> Result<Answer, SolveError> {
        games
            .iter()
            .filter(|game| game.draws.iter().all(Draw::within_limits))
            .try_fold(0 as Answer, |sum, game| sum.checked_add(Answer::from(game.id)))
            .ok_or_else(|| SolveError::failed("sum of game ids overflows"))
    }
}

impl PartSolver<2> for Day02 {
    fn solve(games: &Self::Parsed) -> Result<Answer, SolveError> {
        games
            .iter()
            .try_fold(0 as Answer, |sum, game| sum.checked_add(game.power()?))
            .ok_or_else(|| SolveError::failed("sum of game powers overflows"))
    }
}
