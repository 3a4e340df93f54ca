//! Criterion microbenchmarks for role resolution.
//!
//! Run with:
//!   cargo bench -p emblem-roles
//!
//! HTML reports are written to `target/criterion/`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use emblem_common::models::{GameServerRole, ServerRole};
use emblem_common::permissions::RolePermissions;
use emblem_roles::RoleManager;

fn catalog(size: u8) -> Vec<GameServerRole> {
    (0..size)
        .map(|i| {
            GameServerRole::new(
                i,
                ServerRole {
                    id: format!("role-{i}"),
                    priority: i32::from(i % 17) * 10,
                    badge_icon: if i % 3 == 0 { format!("badge_{i}") } else { String::new() },
                    name_color: match i % 4 {
                        0 => "#ff0000".into(),
                        1 => "#ff0000>#00ff00>#0000ff".into(),
                        _ => String::new(),
                    },
                    chat_color: if i % 2 == 0 { "#cccccc".into() } else { String::new() },
                    permissions: RolePermissions::empty(),
                },
            )
        })
        .collect()
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Resolve a typical player holding a handful of roles.
fn bench_compute_few(c: &mut Criterion) {
    let manager = RoleManager::with_roles(catalog(32));
    let held = [1u8, 4, 9, 16, 31];

    c.bench_function("roles/compute_few", |b| {
        b.iter(|| manager.compute(black_box(&held)))
    });
}

/// Resolve a player holding every role, across catalog sizes.
fn bench_compute_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("roles/compute_all");

    for size in [8u8, 64, 255] {
        let manager = RoleManager::with_roles(catalog(size));
        let held: Vec<u8> = (0..size).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &held, |b, held| {
            b.iter(|| manager.compute(black_box(held)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_few, bench_compute_all);
criterion_main!(benches);
