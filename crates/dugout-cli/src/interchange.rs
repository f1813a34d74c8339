//! Bulk import/export of roster and season stats as CSV.
//!
//! Format: a header row `Name,IsPitcher,<position>...` followed by one row per player
//! with the pitcher flag and the lifetime count for each position column. Export always
//! writes all nine positions in canonical order; import accepts the position columns in
//! any order.

use std::io;

use dugout_engine::{ParsePositionError, Player, Position, Roster, RosterError, SeasonStats};

const NAME_COLUMN: &str = "Name";
const PITCHER_COLUMN: &str = "IsPitcher";

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ImportError {
    #[display("malformed CSV: {_0}")]
    #[from]
    Csv(csv::Error),
    #[display("missing header row")]
    MissingHeader,
    #[display("header must start with 'Name,IsPitcher', got '{found}'")]
    BadHeader { found: String },
    #[display("bad position column: {_0}")]
    #[from]
    UnknownPosition(ParsePositionError),
    #[display("position column '{position}' appears more than once")]
    DuplicateColumn { position: Position },
    #[display("line {line}: {source}")]
    Player { line: u64, source: RosterError },
    #[display("line {line}: expected at most {expected} fields, got {found}")]
    ExtraFields {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[display("line {line}: IsPitcher must be true or false, got '{value}'")]
    BadPitcherFlag { line: u64, value: String },
    #[display("line {line}: invalid {position} count '{value}'")]
    BadCount {
        line: u64,
        position: Position,
        value: String,
    },
}

pub fn write_csv<W>(roster: &Roster, stats: &SeasonStats, writer: W) -> Result<(), csv::Error>
where
    W: io::Write,
{
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec![NAME_COLUMN, PITCHER_COLUMN];
    header.extend(Position::ALL.iter().map(|pos| pos.name()));
    writer.write_record(&header)?;

    for player in roster.players() {
        let mut row = vec![player.name.clone(), player.is_pitcher.to_string()];
        row.extend(
            Position::ALL
                .iter()
                .map(|pos| stats.count(&player.name, *pos).to_string()),
        );
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parses a complete export. Any bad row fails the whole import.
///
/// Missing or empty count cells read as zero; cells beyond the header are an error.
pub fn read_csv<R>(reader: R) -> Result<(Roster, SeasonStats), ImportError>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = reader.records();

    let header = records.next().ok_or(ImportError::MissingHeader)??;
    let columns = parse_header(&header)?;

    let mut roster = Roster::new();
    let mut stats = SeasonStats::new();
    for record in records {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let expected = columns.len() + 2;
        if record.len() > expected {
            return Err(ImportError::ExtraFields {
                line,
                expected,
                found: record.len(),
            });
        }

        let name = record.get(0).unwrap_or_default();
        let is_pitcher = parse_pitcher_flag(record.get(1).unwrap_or_default(), line)?;
        let mut player = Player::new(name);
        player.is_pitcher = is_pitcher;
        roster
            .insert(player)
            .map_err(|source| ImportError::Player { line, source })?;

        for (offset, position) in columns.iter().enumerate() {
            let value = record.get(offset + 2).unwrap_or_default();
            let count = parse_count(value, *position, line)?;
            stats.increment(name, *position, count);
        }
    }
    Ok((roster, stats))
}

fn parse_header(header: &csv::StringRecord) -> Result<Vec<Position>, ImportError> {
    let starts_correctly = header.len() >= 2
        && header[0].eq_ignore_ascii_case(NAME_COLUMN)
        && header[1].eq_ignore_ascii_case(PITCHER_COLUMN);
    if !starts_correctly {
        return Err(ImportError::BadHeader {
            found: header.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut columns: Vec<Position> = Vec::with_capacity(Position::LEN);
    for name in header.iter().skip(2) {
        let position: Position = name.parse()?;
        if columns.contains(&position) {
            return Err(ImportError::DuplicateColumn { position });
        }
        columns.push(position);
    }
    Ok(columns)
}

fn parse_pitcher_flag(value: &str, line: u64) -> Result<bool, ImportError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ImportError::BadPitcherFlag {
            line,
            value: value.to_owned(),
        })
    }
}

fn parse_count(value: &str, position: Position, line: u64) -> Result<u32, ImportError> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| ImportError::BadCount {
        line,
        position,
        value: value.to_owned(),
    })
}
