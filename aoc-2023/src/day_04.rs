//! Day 4: Scratchcards

use crate::utils::parse::{numbers, parse_lines};
use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023"])]
pub struct Day04;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub winning: Vec<u32>,
    pub own: Vec<u32>,
}

impl Card {
    /// How many of the card's own numbers are winning numbers
    pub fn matches(&self) -> usize {
        let winning: HashSet<u32> = self.winning.iter().copied().collect();
        self.own.iter().filter(|n| winning.contains(n)).count()
    }
}

impl FromStr for Card {
    type Err = anyhow::Error;

    /// `Card 1: 41 48 83 | 83 86  6`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (label, numbers_part) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("missing ':' after card label"))?;
        let id = label
            .trim()
            .strip_prefix("Card")
            .ok_or_else(|| anyhow!("expected \"Card <id>\", got {label:?}"))?
            .trim()
            .parse::<u32>()
            .with_context(|| format!("invalid card id in {label:?}"))?;
        let (winning, own) = numbers_part
            .split_once('|')
            .ok_or_else(|| anyhow!("missing '|' between winning and own numbers"))?;

        Ok(Self {
            id,
            winning: numbers(winning)?,
            own: numbers(own)?,
        })
    }
}

impl AocParser for Day04 {
    type Parsed = Vec<Card>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input, |line| line.parse::<Card>())
    }
}

impl PartSolver<1> for Day04 {
    fn solve(cards: &Self::Parsed) -> Result<Answer, SolveError> {
        cards
            .iter()
            .map(|card| match card.matches() {
                0 => Ok(0),
                n => 1i64
                    .checked_shl(n as u32 - 1)
                    .filter(|points| *points > 0)
                    .ok_or_else(|| SolveError::failed(format!("card {} scores too high", card.id))),
            })
            .try_fold(0 as Answer, |total, points| {
                total
                    .checked_add(points?)
                    .ok_or_else(|| SolveError::failed("total points overflow"))
            })
    }
}

impl PartSolver<2> for Day04 {
    fn solve(cards: &Self::Parsed) -> Result<Answer, SolveError> {
        let mut copies = vec![1 as Answer; cards.len()];
        for (idx, card) in cards.iter().enumerate() {
            let won = (idx + 1)..(idx + 1 + card.matches()).min(cards.len());
            let held = copies[idx];
            for count in &mut copies[won] {
                *count = count
                    .checked_add(held)
                    .ok_or_else(|| SolveError::failed("card copies overflow"))?;
            }
        }
        copies
            .iter()
            .try_fold(0 as Answer, |total, &count| total.checked_add(count))
            .ok_or_else(|| SolveError::failed("card copies overflow"))
    }
}
