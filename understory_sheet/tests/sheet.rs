// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_sheet` crate.
//!
//! These drive a `SheetController` only through its public entry points, the
//! way a host framework would.

use kurbo::Vec2;
use understory_sheet::{
    Detent, DetentSet, DragOutcome, PreferenceQueue, SheetConfiguration, SheetController,
    SheetGeometry, SheetPreference, SpacingTable, Visibility, nearest, spacing,
};

fn geometry() -> SheetGeometry {
    SheetGeometry::new(800.0, 0.0, 300.0)
}

fn presented(detents: &[Detent]) -> SheetController {
    let mut sheet = SheetController::default();
    sheet.set_geometry(geometry());
    sheet.apply_preference(SheetPreference::detents(detents.iter().copied()));
    sheet.present();
    sheet
}

#[test]
fn current_detent_stays_available_across_updates() {
    let updates: [&[Detent]; 6] = [
        &[Detent::Medium, Detent::Large],
        &[Detent::Large],
        &[Detent::Fraction(0.4), Detent::Natural],
        &[],
        &[Detent::Height(120.0), Detent::Large, Detent::Medium],
        &[Detent::Medium],
    ];
    let mut sheet = presented(&[Detent::Natural]);
    for detents in updates {
        sheet.apply_preference(SheetPreference::detents(detents.iter().copied()));
        let current = sheet.current_detent().unwrap();
        if detents.is_empty() {
            assert_eq!(current, Detent::Natural);
        } else {
            assert!(detents.contains(&current), "{current:?} not in {detents:?}");
        }
    }
}

#[test]
fn reapplying_geometry_and_configuration_is_idempotent() {
    let config = SheetConfiguration {
        detents: [Detent::Natural, Detent::Medium, Detent::Fraction(0.8)]
            .into_iter()
            .collect(),
        ..SheetConfiguration::default()
    };
    let mut sheet = SheetController::new(config.clone());
    sheet.set_geometry(geometry());
    sheet.present();
    let table = sheet.spacing_table().clone();
    let offset = sheet.render_offset();

    sheet.set_geometry(geometry());
    sheet.set_configuration(config);
    assert_eq!(sheet.spacing_table(), &table);
    assert_eq!(sheet.render_offset(), offset);
}

#[test]
fn spacing_table_has_no_duplicate_spacings() {
    let g = SheetGeometry::new(600.0, 0.0, 600.0);
    // Natural, Large, Fraction(1.0) and Height(600) all rest at 0.
    let detents: DetentSet = [
        Detent::Height(600.0),
        Detent::Fraction(1.0),
        Detent::Natural,
        Detent::Large,
        Detent::Fraction(0.5),
        Detent::Medium,
    ]
    .into_iter()
    .collect();
    let table = SpacingTable::new(&detents, &g);
    let values: Vec<f64> = table.iter().map(|(_, v)| v).collect();
    for (i, a) in values.iter().enumerate() {
        for b in &values[i + 1..] {
            assert_ne!(a, b, "duplicate spacing in {values:?}");
        }
    }
    assert_eq!(table.len(), 2);
    assert!(table.contains(Detent::Natural));
    assert!(table.contains(Detent::Medium));
}

#[test]
fn nearest_minimizes_distance_over_the_table() {
    let g = SheetGeometry::new(900.0, 34.0, 250.0);
    let detents: DetentSet = [
        Detent::Natural,
        Detent::Medium,
        Detent::Large,
        Detent::Fraction(0.2),
        Detent::Height(700.0),
    ]
    .into_iter()
    .collect();
    let table = SpacingTable::new(&detents, &g);
    let mut offset = -200.0;
    while offset <= 1000.0 {
        let chosen = nearest(offset, &table).unwrap();
        let best = table
            .iter()
            .map(|(_, v)| (v - offset).abs())
            .fold(f64::INFINITY, f64::min);
        assert_eq!((table.get(chosen).unwrap() - offset).abs(), best);
        offset += 12.5;
    }
}

#[test]
fn dismiss_threshold_example() {
    // Medium rests at 400, Large at 0; Medium is the shortest detent.
    let mut sheet = presented(&[Detent::Medium, Detent::Large]);
    sheet.update_drag(Vec2::new(0.0, 200.0));
    assert_eq!(
        sheet.end_drag(Vec2::new(0.0, 200.0)),
        DragOutcome::Dismissed(Detent::Medium)
    );
    assert!(!sheet.is_presented());

    let mut sheet = presented(&[Detent::Medium, Detent::Large]);
    sheet.update_drag(Vec2::new(0.0, 100.0));
    assert_eq!(
        sheet.end_drag(Vec2::new(0.0, 100.0)),
        DragOutcome::Settled(Detent::Medium)
    );
    assert!(sheet.is_presented());
}

#[test]
fn dismissal_requires_resting_at_shortest_detent() {
    let mut sheet = presented(&[Detent::Large, Detent::Medium]);
    assert_eq!(sheet.current_detent(), Some(Detent::Large));
    // 0 + 300 = 300 is closest to Medium (400); Large is not the shortest.
    assert_eq!(
        sheet.end_drag(Vec2::new(0.0, 300.0)),
        DragOutcome::Settled(Detent::Medium)
    );
    assert!(sheet.is_presented());
}

#[test]
fn dismissal_can_be_disabled() {
    let mut sheet = presented(&[Detent::Medium, Detent::Large]);
    sheet.apply_preference(SheetPreference::InteractiveDismissDisabled(true));
    assert_eq!(
        sheet.end_drag(Vec2::new(0.0, 400.0)),
        DragOutcome::Settled(Detent::Medium)
    );
    assert!(sheet.is_presented());
}

#[test]
fn single_detent_sheet_dismisses_on_long_drag() {
    let mut sheet = presented(&[Detent::Natural]);
    assert_eq!(
        sheet.end_drag(Vec2::new(0.0, 160.0)),
        DragOutcome::Dismissed(Detent::Natural)
    );
}

#[test]
fn cancelled_drag_resets_translation_and_keeps_detent() {
    let mut sheet = presented(&[Detent::Medium, Detent::Large]);
    for y in [20.0, 80.0, 240.0, 380.0] {
        sheet.update_drag(Vec2::new(3.0, y));
    }
    assert_eq!(sheet.live_translation(), 380.0);
    sheet.cancel_drag();
    assert_eq!(sheet.live_translation(), 0.0);
    assert_eq!(sheet.current_detent(), Some(Detent::Medium));
    assert!(sheet.is_presented());
    assert_eq!(
        sheet.render_offset(),
        Some(Vec2::new(0.0, spacing(Detent::Medium, &geometry())))
    );
}

#[test]
fn drag_indicator_visibility() {
    let sheet = presented(&[Detent::Medium, Detent::Large]);
    assert!(sheet.drag_indicator_visible());

    let mut sheet = presented(&[Detent::Natural]);
    assert!(!sheet.drag_indicator_visible());
    sheet.apply_preference(SheetPreference::DragIndicator(Visibility::Visible));
    assert!(sheet.drag_indicator_visible());
}

#[test]
fn dismissal_commits_resolved_detent_first() {
    // Medium 400 (shortest), Fraction(0.75) 200, Large 0. Resting at Medium,
    // a drag of -240 predicts 160 and resolves to Fraction(0.75); with an
    // upward drag there is no dismissal.
    let mut sheet = presented(&[Detent::Medium, Detent::Fraction(0.75), Detent::Large]);
    assert_eq!(
        sheet.end_drag(Vec2::new(0.0, -240.0)),
        DragOutcome::Settled(Detent::Fraction(0.75))
    );

    // Back at Medium, a long downward drag resolves to Medium and dismisses;
    // the resolved detent is what the sheet remembers.
    sheet.apply_preference(SheetPreference::detents([Detent::Medium, Detent::Large]));
    assert_eq!(sheet.current_detent(), Some(Detent::Medium));
    let outcome = sheet.end_drag(Vec2::new(0.0, 500.0));
    let DragOutcome::Dismissed(resolved) = outcome else {
        panic!("expected dismissal, got {outcome:?}");
    };
    assert_eq!(sheet.last_detent(), Some(resolved));

    let detents: DetentSet = [Detent::Medium, Detent::Large].into_iter().collect();
    let table = SpacingTable::new(&detents, &geometry());
    assert_eq!(nearest(400.0 + 500.0, &table), Some(resolved));
}

#[test]
fn tie_breaking_does_not_depend_on_declaration_order() {
    let g = SheetGeometry::new(500.0, 0.0, 500.0);
    let forward = [
        Detent::Height(500.0),
        Detent::Large,
        Detent::Natural,
        Detent::Fraction(1.0),
    ];
    let mut backward = forward;
    backward.reverse();

    let forward: DetentSet = forward.into_iter().collect();
    let backward: DetentSet = backward.into_iter().collect();
    let a = SpacingTable::new(&forward, &g);
    let b = SpacingTable::new(&backward, &g);
    assert_eq!(a, b);
    assert_eq!(a.len(), 1);
    assert!(a.contains(Detent::Natural));
}

#[test]
fn preferences_coalesce_last_write_wins() {
    let mut sheet = presented(&[Detent::Natural]);
    let mut queue = PreferenceQueue::new();
    queue.publish(SheetPreference::CornerRadius(Some(4.0)));
    queue.publish(SheetPreference::ShadowRadius(Some(5.0)));
    queue.publish(SheetPreference::CornerRadius(Some(12.0)));
    queue.publish(SheetPreference::ShadowEnabled(false));
    queue.publish(SheetPreference::detents([Detent::Large, Detent::Medium]));
    sheet.apply_preferences(&mut queue);

    assert!(queue.is_empty());
    assert_eq!(sheet.corner_radius(), 12.0);
    assert_eq!(sheet.shadow_radius(), 0.0);
    assert_eq!(sheet.current_detent(), Some(Detent::Large));
}

#[test]
fn configuration_while_hidden_applies_on_present() {
    let mut sheet = SheetController::default();
    sheet.set_geometry(geometry());
    sheet.apply_preference(SheetPreference::detents([Detent::Fraction(0.5), Detent::Large]));
    assert_eq!(sheet.current_detent(), None);
    sheet.present();
    assert_eq!(sheet.current_detent(), Some(Detent::Fraction(0.5)));
    assert_eq!(sheet.render_offset(), Some(Vec2::new(0.0, 400.0)));
}

#[test]
fn degenerate_geometry_does_not_panic() {
    let mut sheet = SheetController::default();
    sheet.set_geometry(SheetGeometry::new(0.0, 20.0, 100.0));
    sheet.apply_preference(SheetPreference::detents([Detent::Medium, Detent::Large]));
    sheet.present();
    sheet.update_drag(Vec2::new(0.0, 50.0));
    let outcome = sheet.release();
    assert!(matches!(outcome, DragOutcome::Settled(_)), "{outcome:?}");
    assert!(sheet.is_presented());
}

#[test]
fn zero_release_keeps_a_coincident_detent() {
    // Large and Natural both rest at 0; only Natural enters the table.
    let mut sheet = SheetController::default();
    sheet.set_geometry(SheetGeometry::new(800.0, 0.0, 800.0));
    sheet.apply_preference(SheetPreference::detents([Detent::Large, Detent::Natural]));
    sheet.present();
    assert_eq!(sheet.current_detent(), Some(Detent::Large));
    assert!(!sheet.spacing_table().contains(Detent::Large));

    assert_eq!(
        sheet.end_drag(Vec2::ZERO),
        DragOutcome::Settled(Detent::Large)
    );
    assert_eq!(sheet.current_detent(), Some(Detent::Large));
    assert_eq!(sheet.render_offset(), Some(Vec2::ZERO));
}

#[test]
fn coincident_detent_at_shortest_spacing_dismisses() {
    // Height(400) and Medium both rest at 400, the shortest spacing; the table
    // keeps Medium.
    let mut sheet = SheetController::default();
    sheet.set_geometry(SheetGeometry::new(800.0, 0.0, 0.0));
    sheet.apply_preference(SheetPreference::detents([
        Detent::Height(400.0),
        Detent::Medium,
    ]));
    sheet.present();
    assert_eq!(sheet.current_detent(), Some(Detent::Height(400.0)));

    sheet.update_drag(Vec2::new(0.0, 300.0));
    assert_eq!(
        sheet.release(),
        DragOutcome::Dismissed(Detent::Height(400.0))
    );
    assert!(!sheet.is_presented());
    assert_eq!(sheet.last_detent(), Some(Detent::Height(400.0)));
}
