//! Logic scenarios over bag accounting, the countdown and input validation.
use anyhow::{Result, bail, ensure};
use disaster_core::constants::{MAX_QUANTITY, MIN_QUANTITY};
use disaster_core::{
    BagQueue, BagSpec, BagSubmission, Countdown, Item, JoinError, Tick, clamp_quantity,
    validate_room_code, validate_team_name,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ScenarioCtx;

const FLOAT_TOLERANCE: f64 = 1e-9;

fn random_spec(rng: &mut StdRng) -> BagSpec {
    BagSpec {
        id: rng.gen_range(1..=4),
        weight_limit: f64::from(rng.gen_range(1_u8..=3)),
        volume_limit: f64::from(rng.gen_range(1_u8..=3)),
        ..BagSpec::default()
    }
}

/// Random adds and removes never push the bag over its caps, and a rejected
/// add leaves the queue exactly as it was.
pub fn bag_capacity_check(ctx: &ScenarioCtx) -> Result<()> {
    ensure!(!ctx.catalog.is_empty(), "catalog has no items");
    let mut rng = StdRng::seed_from_u64(ctx.seed);
    let spec = random_spec(&mut rng);
    let mut queue = BagQueue::new(spec.clone());
    let (mut accepted, mut rejected) = (0_u32, 0_u32);

    for _ in 0..60 {
        if !queue.is_empty() && rng.gen_bool(0.25) {
            let index = rng.gen_range(0..queue.len());
            let before = (queue.len(), queue.total_weight(), queue.total_volume());
            let Some(removed) = queue.remove(index) else {
                bail!("remove({index}) failed on a queue of {}", before.0);
            };
            ensure!(queue.len() == before.0 - 1, "remove dropped more than one entry");
            ensure!(
                (before.1 - queue.total_weight() - removed.weight).abs() < FLOAT_TOLERANCE,
                "weight did not drop by {}",
                removed.weight
            );
            ensure!(
                (before.2 - queue.total_volume() - removed.volume).abs() < FLOAT_TOLERANCE,
                "volume did not drop by {}",
                removed.volume
            );
            continue;
        }

        let item = &ctx.catalog.items[rng.gen_range(0..ctx.catalog.len())];
        let quantity = rng.gen_range(MIN_QUANTITY..=MAX_QUANTITY);
        let snapshot = queue.clone();
        match queue.add(item, quantity) {
            Ok(()) => accepted += 1,
            Err(_) => {
                rejected += 1;
                ensure!(queue == snapshot, "rejected add of {} changed the bag", item.name);
            }
        }
        ensure!(
            queue.total_weight() <= spec.max_weight() + FLOAT_TOLERANCE,
            "weight {} exceeds cap {}",
            queue.total_weight(),
            spec.max_weight()
        );
        ensure!(
            queue.total_volume() <= spec.max_volume() + FLOAT_TOLERANCE,
            "volume {} exceeds cap {}",
            queue.total_volume(),
            spec.max_volume()
        );
    }

    if ctx.verbose {
        println!(
            "  🎒 seed {}: {accepted} adds accepted, {rejected} rejected, {} entries packed",
            ctx.seed,
            queue.len()
        );
    }
    Ok(())
}

/// Filling a bag exactly to its cap is allowed; one more unit is not.
pub fn bag_boundary_check(_ctx: &ScenarioCtx) -> Result<()> {
    let unit = Item {
        id: 1,
        kor_name: "상자".to_string(),
        name: "box".to_string(),
        weight: 1.0,
        volume: 1.0,
        description: String::new(),
        image_path: Item::image_path_for("box"),
    };
    let mut queue = BagQueue::new(BagSpec {
        weight_limit: 1.0,
        volume_limit: 1.0,
        ..BagSpec::default()
    });
    ensure!(queue.add(&unit, 5).is_ok(), "first 5 units should fit");
    ensure!(queue.add(&unit, 5).is_ok(), "reaching the cap exactly should fit");
    ensure!(queue.add(&unit, 1).is_err(), "11th unit should be rejected");
    ensure!(queue.len() == 10, "bag should hold 10 units, got {}", queue.len());
    ensure!(
        clamp_quantity(0) == MIN_QUANTITY && clamp_quantity(99) == MAX_QUANTITY,
        "quantities outside 1..=10 should clamp"
    );
    ensure!(queue.remove(10).is_none(), "out-of-range remove should be a no-op");
    Ok(())
}

/// The submission body carries one count per item name plus the totals.
pub fn flatten_submission_check(ctx: &ScenarioCtx) -> Result<()> {
    ensure!(!ctx.catalog.is_empty(), "catalog has no items");
    let mut rng = StdRng::seed_from_u64(ctx.seed);
    let mut queue = BagQueue::new(BagSpec {
        weight_limit: 100.0,
        volume_limit: 100.0,
        ..BagSpec::default()
    });
    for _ in 0..8 {
        let item = &ctx.catalog.items[rng.gen_range(0..ctx.catalog.len())];
        queue
            .add(item, rng.gen_range(MIN_QUANTITY..=3))
            .map_err(|err| anyhow::anyhow!("oversized test bag rejected an add: {err}"))?;
    }
    let contents = queue.contents();
    let body = BagSubmission::flatten(&contents, queue.spec().id);
    let fields = body.fields();

    ensure!(
        fields.len() == contents.items.len() + 3,
        "expected {} keys, got {}",
        contents.items.len() + 3,
        fields.len()
    );
    for (name, count) in &contents.items {
        ensure!(
            fields.get(name).and_then(serde_json::Value::as_u64) == Some(u64::from(*count)),
            "count for {name} missing from submission"
        );
    }
    let counted: u32 = contents.items.values().sum();
    ensure!(
        counted as usize == queue.len(),
        "item counts add up to {counted}, queue holds {}",
        queue.len()
    );
    ensure!(
        fields.get("bagID").and_then(serde_json::Value::as_u64) == Some(u64::from(queue.spec().id)),
        "bagID missing"
    );
    ensure!(
        fields.contains_key("totalWeight") && fields.contains_key("totalVolume"),
        "totals missing"
    );
    Ok(())
}

/// The countdown reports expiry exactly once, on the last tick.
pub fn countdown_check(ctx: &ScenarioCtx) -> Result<()> {
    let seconds = u32::try_from(ctx.seed % 200).unwrap_or(0) + 1;
    let mut countdown = Countdown::new(seconds);
    let mut expired_at = None;
    for tick_no in 1..=seconds + 5 {
        match countdown.tick() {
            Tick::Running(left) => ensure!(
                left == seconds - tick_no,
                "tick {tick_no}: {left}s left, expected {}",
                seconds - tick_no
            ),
            Tick::Expired => {
                ensure!(expired_at.is_none(), "expired twice");
                expired_at = Some(tick_no);
            }
            Tick::Finished => ensure!(expired_at.is_some(), "finished before expiring"),
        }
    }
    ensure!(
        expired_at == Some(seconds),
        "expected expiry on tick {seconds}, got {expired_at:?}"
    );
    ensure!(countdown.remaining() == 0 && countdown.is_expired(), "timer not at zero");
    Ok(())
}

/// Blank codes and team names are rejected before any request.
pub fn input_validation_check(_ctx: &ScenarioCtx) -> Result<()> {
    for blank in ["", " ", "\t", "  \n "] {
        ensure!(
            validate_room_code(blank) == Err(JoinError::EmptyCode),
            "blank room code {blank:?} accepted"
        );
        ensure!(
            validate_team_name(Some("AB12CD"), blank) == Err(JoinError::EmptyTeamName),
            "blank team name {blank:?} accepted"
        );
        ensure!(
            validate_team_name(Some(blank), "alpha") == Err(JoinError::MissingRoomCode),
            "blank carried room code {blank:?} accepted"
        );
    }
    ensure!(validate_room_code(" AB12CD ") == Ok("AB12CD"), "room code not trimmed");
    ensure!(
        validate_team_name(None, "alpha") == Err(JoinError::MissingRoomCode),
        "missing room code accepted"
    );
    Ok(())
}
