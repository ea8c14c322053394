//! Game rules for the Tower of Hanoi.

use super::action::{MoveError, MoveRequest};
use super::types::{Disk, Peg, Towers};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether `request` is legal on `towers` and returns the disk that
/// would move.
///
/// Checks run in a fixed order and the first failure wins: peg range, empty
/// source, same peg, then disk ordering.
#[instrument(skip_all, fields(request = %request))]
pub fn validate_move(towers: &Towers, request: MoveRequest) -> Result<Disk, MoveError> {
    let (from, to) = resolve_pegs(request)?;

    let Some(disk) = towers.top(from) else {
        return Err(MoveError::SourceEmpty(from));
    };

    if from == to {
        return Err(MoveError::SamePeg(from));
    }

    match towers.top(to) {
        None => Ok(disk),
        Some(onto) if disk < onto => Ok(disk),
        Some(onto) => Err(MoveError::LargerOnSmaller { disk, onto }),
    }
}

/// Maps the request's indices onto pegs.
pub fn resolve_pegs(request: MoveRequest) -> Result<(Peg, Peg), MoveError> {
    match (Peg::from_index(request.from), Peg::from_index(request.to)) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(MoveError::PegOutOfRange {
            from: request.from,
            to: request.to,
        }),
    }
}

/// Returns true when every one of `disk_count` disks sits on the destination
/// peg and the other two pegs are empty.
pub fn is_complete(towers: &Towers, disk_count: u8) -> bool {
    towers.peg(Peg::Destination).len() == usize::from(disk_count)
        && towers.is_empty(Peg::Source)
        && towers.is_empty(Peg::Auxiliary)
}

/// Every move the validator would accept on `towers`.
pub fn legal_moves(towers: &Towers) -> Vec<MoveRequest> {
    Peg::iter()
        .flat_map(|from| Peg::iter().map(move |to| MoveRequest::new(from.index(), to.index())))
        .filter(|request| validate_move(towers, *request).is_ok())
        .collect()
}

/// Returns true if every peg is strictly decreasing from bottom to top.
pub fn pegs_descending(towers: &Towers) -> bool {
    towers
        .pegs()
        .iter()
        .all(|peg| peg.windows(2).all(|pair| pair[0] > pair[1]))
}
