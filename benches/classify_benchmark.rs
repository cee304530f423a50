/// Benchmarks for pattern classification and the vault walk
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use note_vault::vault::{NotePatterns, NoteVault};
use std::path::Path;
use tempfile::TempDir;

/// Helper to lay out a vault with `count` notes of each kind
fn create_test_vault(dir: &TempDir, count: usize) -> anyhow::Result<()> {
    let root = dir.path();
    std::fs::create_dir_all(root.join("dailies"))?;
    std::fs::create_dir_all(root.join("weeklies"))?;
    std::fs::create_dir_all(root.join("projects"))?;

    for i in 0..count {
        let day = format!("{:04}-{:02}-{:02}.md", 2000 + i / 336, 1 + (i / 28) % 12, 1 + i % 28);
        std::fs::write(root.join("dailies").join(day), "")?;
        let week = format!("{:04}-W{:02}.md", 2000 + i / 52, 1 + i % 52);
        std::fs::write(root.join("weeklies").join(week), "")?;
        std::fs::write(root.join("projects").join(format!("project_{}.md", i)), "")?;
        std::fs::write(root.join("projects").join(format!("asset_{}.png", i)), "")?;
    }

    Ok(())
}

fn benchmark_classify(c: &mut Criterion) {
    let patterns = NotePatterns::compile(Path::new("/vault")).unwrap();
    let paths = [
        "/vault/dailies/2024-01-05.md",
        "/vault/weeklies/2024-W02.md",
        "/vault/notes/todo.md",
        "/vault/notes/ignore.txt",
    ];

    c.bench_function("classify_paths", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(patterns.classify(black_box(path)));
            }
        });
    });
}

fn benchmark_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");

    for note_count in [10, 100, 500].iter() {
        let dir = TempDir::new().unwrap();
        create_test_vault(&dir, *note_count).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_notes", note_count)),
            note_count,
            |b, _| {
                b.iter(|| {
                    let mut vault = NoteVault::create(dir.path()).unwrap();
                    vault.initialize().unwrap();
                    black_box(vault.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_classify, benchmark_initialize);
criterion_main!(benches);
