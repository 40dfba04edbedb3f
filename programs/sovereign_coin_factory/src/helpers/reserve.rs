use super::*;

pub fn is_valid_bond_rating(bond_rating: u8) -> bool {
    (MIN_BOND_RATING..=MAX_BOND_RATING).contains(&bond_rating)
}

/// Required fiat reserve percentage for a bond rating.
///
/// `base + (rating - 1) * multiplier / 9`. The product is formed before dividing and the
/// division truncates, so only ratings whose step count times the multiplier is a
/// multiple of 9 land exactly on the line. The result saturates at 100%.
pub fn calculate_required_reserve(base: u8, bond_rating: u8, multiplier: u8) -> Result<u8> {
    require!(
        is_valid_bond_rating(bond_rating),
        SovereignFactoryError::InvalidBondRating
    );

    // (10 - 1) * 255 fits comfortably in u16
    let steps = (bond_rating - MIN_BOND_RATING) as u16;
    let adjustment = steps * multiplier as u16 / RESERVE_RATING_STEPS;
    let total = base as u16 + adjustment;

    Ok(total.min(MAX_PERCENTAGE as u16) as u8)
}
