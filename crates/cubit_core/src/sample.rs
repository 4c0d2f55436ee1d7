//! Sampling helpers built on [`RandomProvider`]

use std::collections::HashSet;
use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::ambient::with_random;
use crate::error::RandomError;
use crate::random::{scale, RandomProvider};

/// Draw `count` distinct integers from [low, high), in first-seen order.
///
/// Rejection sampling: cheap when the range is much wider than `count`,
/// slow as the two approach each other.
pub fn random_non_repeating<R>(
    rng: &mut R,
    count: usize,
    low: i32,
    high: i32,
) -> Result<Vec<i32>, RandomError>
where
    R: RandomProvider + ?Sized,
{
    let available = i64::from(high) - i64::from(low);
    let too_few = i64::try_from(count).map_or(true, |count| available < count);
    if too_few {
        return Err(RandomError::InsufficientRange { count, low, high });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        let value = rng.range_i32(low, high);
        if seen.insert(value) {
            values.push(value);
        }
    }
    Ok(values)
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T])
where
    R: RandomProvider + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = scale(rng.next_f64(), (i + 1) as i64) as usize;
        items.swap(i, j);
    }
}

/// Uniformly pick one element, or `None` for an empty slice.
pub fn choose<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomProvider + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(scale(rng.next_f64(), items.len() as i64) as usize)
}

/// Overwrite `dest` with independent bytes from the thread's ambient provider.
pub fn randomize_bytes(dest: &mut [u8]) {
    with_random(|rng| rng.fill_bytes(dest));
}

/// Component-wise uniform point in the box [min, max).
pub fn vec2_in<R>(rng: &mut R, min: Vec2, max: Vec2) -> Vec2
where
    R: RandomProvider + ?Sized,
{
    Vec2::new(rng.range_f32(min.x, max.x), rng.range_f32(min.y, max.y))
}

pub fn vec3_in<R>(rng: &mut R, min: Vec3, max: Vec3) -> Vec3
where
    R: RandomProvider + ?Sized,
{
    Vec3::new(
        rng.range_f32(min.x, max.x),
        rng.range_f32(min.y, max.y),
        rng.range_f32(min.z, max.z),
    )
}

/// Unit-length direction with a uniform angle.
pub fn unit_vec2<R>(rng: &mut R) -> Vec2
where
    R: RandomProvider + ?Sized,
{
    Vec2::from_angle(rng.range_f32(0.0, TAU))
}
