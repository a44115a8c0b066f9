//! End-to-end player flow: host creates a room, a team joins, waits through
//! both phase gates, packs a bag and submits it.
use anyhow::{Context, Result, anyhow, ensure};
use async_trait::async_trait;
use disaster_core::{
    BagQueue, BagSubmission, GameApi, JoinError, PackingTicket, PhaseGate, PollOutcome,
    RoomSetup, SetupGrid, TeamTicket, create_room, join_team, lookup_room, refresh_teams,
    submit_bag,
};
use futures::executor::block_on;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{BackendScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::backend::is_room_code;
use crate::common::util::run_team_name;
use crate::logic::MemoryBackend;

pub struct FullFlowScenario;

impl FullFlowScenario {
    pub const NAME: &'static str = "Full Player Flow";
}

fn setup_for(seed: u64) -> RoomSetup {
    let mut setup = RoomSetup {
        title: format!("tester-room-{seed}"),
        ..RoomSetup::default()
    };
    setup.select(SetupGrid::PreInfo, u8::try_from(seed % 8).unwrap_or(0));
    setup.select(SetupGrid::Disaster, u8::try_from((seed / 8) % 8).unwrap_or(0));
    setup
}

/// Host side plus one team joining. Shared by the in-memory run and the live
/// smoke test.
async fn open_room_and_join<A>(api: &A, seed: u64, team_name: &str) -> Result<TeamTicket>
where
    A: GameApi + ?Sized,
{
    let host = create_room(api, &setup_for(seed))
        .await
        .context("creating room")?;
    let code = host
        .room_code
        .ok_or_else(|| anyhow!("create response carried no room code"))?;
    ensure!(is_room_code(&code), "unexpected room code shape: {code}");

    let (room, info) = lookup_room(api, &format!("  {code} "))
        .await
        .map_err(|err| anyhow!("looking up {code}: {err}"))?;
    ensure!(room.room_code == code, "lookup returned {}", room.room_code);
    ensure!(
        info.host_nickname == host.host_nickname,
        "host nickname {} != {}",
        info.host_nickname,
        host.host_nickname
    );

    let ticket = join_team(api, Some(&room.room_code), team_name)
        .await
        .map_err(|err| anyhow!("joining {code} as {team_name}: {err}"))?;
    let listed = api.teams(&code).await.context("listing teams")?;
    ensure!(
        listed.teams.iter().any(|t| t == team_name),
        "{team_name} missing from {:?}",
        listed.teams
    );
    Ok(ticket)
}

/// Pack random catalog items until the bag refuses one, then submit.
async fn pack_and_submit(
    backend: &MemoryBackend,
    ctx: &ScenarioCtx,
    ticket: &PackingTicket,
) -> Result<()> {
    ensure!(!ctx.catalog.is_empty(), "catalog has no items");
    let mut rng = StdRng::seed_from_u64(ctx.seed);
    let mut queue = BagQueue::new(ticket.selected_bag.clone());
    for _ in 0..20 {
        let item = &ctx.catalog.items[rng.gen_range(0..ctx.catalog.len())];
        if queue.add(item, rng.gen_range(1..=3)).is_err() {
            break;
        }
    }

    let submitted = submit_bag(backend, ticket, &queue)
        .await
        .map_err(|err| anyhow!("submitting bag: {err}"))?;
    ensure!(!submitted.message.is_empty(), "empty submit message");
    ensure!(
        submitted.scene.bag_contents == queue.contents(),
        "scene contents differ from the packed bag"
    );

    let stored = backend
        .submission(&ticket.room_code, &ticket.team_name)
        .ok_or_else(|| anyhow!("backend kept no submission"))?;
    let expected = BagSubmission::flatten(&queue.contents(), ticket.selected_bag.id).to_value();
    ensure!(stored == expected, "stored body {stored} != {expected}");
    Ok(())
}

async fn memory_flow(ctx: &ScenarioCtx) -> Result<()> {
    let backend = MemoryBackend::new(ctx.seed);
    let ticket = open_room_and_join(&backend, ctx.seed, "alpha").await?;
    let code = ticket.room_code.clone();

    let rival = join_team(&backend, Some(&code), "beta").await;
    ensure!(rival.is_ok(), "second team rejected: {rival:?}");
    let dup = join_team(&backend, Some(&code), "alpha").await;
    ensure!(
        dup == Err(JoinError::JoinRejected),
        "duplicate team not rejected: {dup:?}"
    );
    let bogus = lookup_room(&backend, "ZZZZZZ").await;
    ensure!(
        code == "ZZZZZZ" || bogus.is_err(),
        "unknown room accepted: {bogus:?}"
    );

    let others = refresh_teams(&backend, &code, Some(&ticket.team_name)).await;
    ensure!(
        others.as_deref() == Some(&["beta".to_string()][..]),
        "lobby should only list beta, got {others:?}"
    );

    let lobby = PhaseGate::JoinConfirmed;
    ensure!(
        lobby.poll(&backend, &code).await == PollOutcome::Stay,
        "lobby advanced before the host confirmed"
    );
    backend.confirm_teams(&code);
    ensure!(
        lobby.poll(&backend, &code).await == PollOutcome::Advance,
        "lobby did not advance"
    );

    let waiting = PhaseGate::GameInfoConfirmed;
    ensure!(
        waiting.poll(&backend, &code).await == PollOutcome::Stay,
        "waiting room advanced during the briefing"
    );
    backend.start_packing(&code);
    ensure!(
        waiting.poll(&backend, &code).await == PollOutcome::Advance,
        "waiting room did not advance"
    );

    let packing = PackingTicket::from(ticket);
    pack_and_submit(&backend, ctx, &packing).await?;

    if ctx.verbose {
        println!(
            "  🏠 seed {}: room {code}, {} requests served",
            ctx.seed,
            backend.requests()
        );
    }
    Ok(())
}

fn full_flow_check(ctx: &ScenarioCtx) -> Result<()> {
    block_on(memory_flow(ctx))
}

#[async_trait(?Send)]
impl BackendScenario for FullFlowScenario {
    async fn run_backend(&self, api: &dyn GameApi, ctx: &ScenarioCtx) -> Result<()> {
        let team_name = run_team_name(ctx.seed);
        let ticket = open_room_and_join(api, ctx.seed, &team_name).await?;
        // The host never confirms here, so only check that polling answers.
        api.join_confirmed(&ticket.room_code)
            .await
            .context("polling join_confirmed")?;
        api.game_info_confirmed(&ticket.room_code)
            .await
            .context("polling game_info_confirmed")?;
        if ctx.verbose {
            println!("  🌐 joined {} as {}", ticket.room_code, ticket.team_name);
        }
        Ok(())
    }
}

impl CombinedScenario for FullFlowScenario {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(Self::NAME, full_flow_check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::sample_catalog;
    use std::sync::Arc;

    fn ctx(seed: u64) -> ScenarioCtx {
        ScenarioCtx {
            seed,
            catalog: Arc::new(sample_catalog()),
            verbose: false,
        }
    }

    #[test]
    fn memory_flow_passes_for_several_seeds() {
        for seed in [1, 2, 1337] {
            full_flow_check(&ctx(seed)).expect("flow");
        }
    }

    #[test]
    fn backend_run_works_against_memory_backend() {
        let backend = MemoryBackend::new(5);
        block_on(FullFlowScenario.run_backend(&backend, &ctx(5))).expect("smoke");
    }

    #[test]
    fn setup_picks_stay_on_the_grid() {
        let setup = setup_for(63);
        assert_eq!(setup.selected(SetupGrid::PreInfo), Some(7));
        assert_eq!(setup.selected(SetupGrid::Disaster), Some(7));
        assert_eq!(setup.to_request().host_nickname, "tester-room-63");
    }

    #[test]
    fn exposes_logic_scenario() {
        let logic = FullFlowScenario.as_logic_scenario().expect("logic");
        assert_eq!(logic.name, "Full Player Flow");
    }
}
