use bevy::prelude::*;

use sortviz_core::{RunReport, SortableItem};

use crate::AppState;
use crate::state::Viz;

pub struct DriverPlugin;

impl Plugin for DriverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentOrder>()
            .init_resource::<LastRun>()
            .add_systems(OnEnter(AppState::Ready), sync_order)
            .add_systems(Update, poll_session.run_if(in_state(AppState::Ready)));
    }
}

/// The latest published sequence order, as the renderer should lay it out.
#[derive(Resource, Default)]
pub struct CurrentOrder(pub Vec<SortableItem>);

/// Report of the most recently finished run, for the status line.
#[derive(Resource, Default)]
pub struct LastRun(pub Option<RunReport>);

fn sync_order(viz: Res<Viz>, mut order: ResMut<CurrentOrder>) {
    order.0 = viz.session.items().to_vec();
}

/// Drain this frame's commits. The renderer only needs the newest order;
/// intermediate commits within one frame are already paced half a second
/// apart, so in practice at most one arrives per frame.
fn poll_session(mut viz: ResMut<Viz>, mut order: ResMut<CurrentOrder>, mut last: ResMut<LastRun>) {
    let commits = viz.session.poll();
    if let Some(commit) = commits.last() {
        order.0 = commit.items.clone();
    }

    if let Some(report) = viz.session.take_report() {
        info!(
            "{} finished: {} commits, {:?}",
            report.algorithm.label(),
            report.commits,
            report.outcome
        );
        order.0 = viz.session.items().to_vec();
        last.0 = Some(report);
    }
}
