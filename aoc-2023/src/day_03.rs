//! Day 3: Gear Ratios

use crate::utils::parse::{blocks, invalid_format};
use anyhow::{Context, anyhow, ensure};
use aoc_solver::{Answer, AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Day03;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Symbol(char),
    /// Index into [`Schematic::numbers`]; every cell of a multi-digit number
    /// points at the same entry
    Number(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic {
    rows: Vec<Vec<Cell>>,
    numbers: Vec<Answer>,
}

impl Schematic {
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn numbers(&self) -> &[Answer] {
        &self.numbers
    }

    fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Every symbol with the distinct numbers touching it, diagonals included
    pub fn symbols(&self) -> impl Iterator<Item = (char, Vec<Answer>)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| match cell {
                Cell::Symbol(symbol) => Some((*symbol, self.adjacent_numbers(row, col))),
                _ => None,
            })
        })
    }

    fn adjacent_numbers(&self, row: usize, col: usize) -> Vec<Answer> {
        (-1isize..=1)
            .cartesian_product(-1isize..=1)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                match self.cell(r, c)? {
                    Cell::Number(id) => Some(id),
                    _ => None,
                }
            })
            .unique()
            .map(|id| self.numbers[id])
            .collect()
    }
}

/// One schematic row; each number found is appended to `numbers`
fn parse_row(line: &str, numbers: &mut Vec<Answer>) -> anyhow::Result<Vec<Cell>> {
    ensure!(line.is_ascii(), "schematic must be ASCII, got {line:?}");

    let mut row: Vec<Cell> = line
        .chars()
        .map(|ch| if ch == '.' { Cell::Empty } else { Cell::Symbol(ch) })
        .collect();
    for found in NUMBER.find_iter(line) {
        let value = found
            .as_str()
            .parse::<Answer>()
            .with_context(|| format!("number {:?} out of range", found.as_str()))?;
        row[found.range()].fill(Cell::Number(numbers.len()));
        numbers.push(value);
    }
    Ok(row)
}

impl AocParser for Day03 {
    type Parsed = Schematic;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        // a blank row would make the rows around it look adjacent
        let grid = match blocks(input).as_slice() {
            [] => Vec::new(),
            [grid] => grid.clone(),
            [first, ..] => {
                let blank = first.last().map_or(1, |(line_no, _)| line_no + 1);
                return Err(invalid_format(anyhow!(
                    "(line {blank}) blank line inside the schematic"
                )));
            }
        };

        let mut numbers = Vec::new();
        let rows = grid
            .into_iter()
            .map(|(line_no, line)| {
                parse_row(line, &mut numbers).with_context(|| format!("(line {line_no})"))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid_format)?;

        Ok(Schematic { rows, numbers })
    }
}

impl PartSolver<1> for Day03 {
    fn solve(schematic: &Self::Parsed) -> Result<Answer, SolveError> {
        schematic
            .symbols()
            .flat_map(|(_, numbers)| numbers)
            .try_fold(0 as Answer, Answer::checked_add)
            .ok_or_else(|| SolveError::failed("sum of part numbers overflows"))
    }
}

impl PartSolver<2> for Day03 {
    fn solve(schematic: &Self::Parsed) -> Result<Answer, SolveError> {
        schematic
            .symbols()
            .filter_map(|(symbol, numbers)| match numbers.as_slice() {
                &[a, b] if symbol == '*' => Some(a.checked_mul(b)),
                _ => None,
            })
            .try_fold(0 as Answer, |sum, ratio| sum.checked_add(ratio?))
            .ok_or_else(|| SolveError::failed("sum of gear ratios overflows"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    const EXAMPLE: &str = include_str!("../../data/2023/day_03/example_input.txt");

    #[test]
    fn test_example() {
        let schematic = Day03::parse(EXAMPLE).unwrap();
        assert_eq!(schematic.numbers().len(), 10);
        assert_eq!(Day03::solve_part(&schematic, 1).unwrap(), 4361);
        assert_eq!(Day03::solve_part(&schematic, 2).unwrap(), 467835);
    }

    #[test]
    fn test_number_spans_cells() {
        let schematic = Day03::parse("467.\n.*..\n").unwrap();
        assert_eq!(
            schematic.rows()[0],
            vec![Cell::Number(0), Cell::Number(0), Cell::Number(0), Cell::Empty]
        );
        // one number touching the symbol through two of its cells counts once
        let symbols: Vec<_> = schematic.symbols().collect();
        assert_eq!(symbols, vec![('*', vec![467])]);
    }

    #[test]
    fn test_edges_and_ragged_rows() {
        let schematic = Day03::parse("#1\n2\n").unwrap();
        let symbols: Vec<_> = schematic.symbols().collect();
        assert_eq!(symbols, vec![('#', vec![1, 2])]);
    }

    #[test]
    fn test_gear_needs_exactly_two() {
        let schematic = Day03::parse("1*2\n.3.\n").unwrap();
        assert_eq!(<Day03 as PartSolver<2>>::solve(&schematic).unwrap(), 0);
        assert_eq!(<Day03 as PartSolver<1>>::solve(&schematic).unwrap(), 6);

        let schematic = Day03::parse("4+5\n").unwrap();
        assert_eq!(<Day03 as PartSolver<2>>::solve(&schematic).unwrap(), 0);
    }

    #[test]
    fn test_large_numbers_fail_instead_of_wrapping() {
        let schematic = Day03::parse("9999999999*9999999999\n").unwrap();
        assert_eq!(<Day03 as PartSolver<1>>::solve(&schematic).unwrap(), 19999999998);
        assert!(matches!(
            <Day03 as PartSolver<2>>::solve(&schematic),
            Err(SolveError::SolveFailed(_))
        ));

        let schematic = Day03::parse("9000000000000000000#9000000000000000000\n").unwrap();
        assert!(matches!(
            <Day03 as PartSolver<1>>::solve(&schematic),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_blank_row_inside_grid_is_rejected() {
        match Day03::parse("1.\n\n*.\n") {
            Err(ParseError::InvalidFormat(msg)) => assert!(msg.starts_with("(line 2)"), "{msg}"),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
        // surrounding blank lines are fine
        let schematic = Day03::parse("\n1.\n*.\n\n").unwrap();
        assert_eq!(<Day03 as PartSolver<1>>::solve(&schematic).unwrap(), 1);
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(matches!(
            Day03::parse("..\n.é\n"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 2)")
        ));
    }
}
