//! Edge caches under movement and under concurrent casts.
mod utils;

use std::sync::Arc;
use std::thread;

use anyhow::Result;
use approx::assert_relative_eq;

use sightline_collision::*;

use utils::*;

#[test]
fn moving_objects_are_seen_where_they_are() -> Result<()> {
    sightline_logging::log_to_stderr();
    let map = TestMap::new(30, 30);
    let block = map.add(TestObject::new(V2::new(10.0, 5.0), V2::new(2.0, 2.0)));
    let cast = || {
        RaycastBuilder::new()
            .map(map.as_scene_map())
            .origin(V2::new(0.0, 5.3))
            .calculate()
    };

    assert_relative_eq!(cast()?.length(), 9.0);
    block.move_to(V2::new(20.0, 5.0), 0.0);
    assert_relative_eq!(cast()?.length(), 19.0);
    block.move_to(V2::new(20.0, 5.0), 90.0);
    assert_relative_eq!(cast()?.length(), 19.0, epsilon = 1e-9);
    block.move_to(V2::new(20.0, 5.0), 45.0);
    assert_relative_eq!(cast()?.length(), 20.3 - 2f64.sqrt(), epsilon = 1e-6);
    Ok(())
}

#[test]
fn guarded_caches_serve_many_threads() -> Result<()> {
    sightline_logging::log_to_stderr();
    CollisionConfig {
        guarded_edge_cache: true,
    }
    .install();
    assert!(CollisionConfig::current().guarded_edge_cache);

    let map = TestMap::new(100, 100);
    for i in 0..10 {
        map.add(TestObject::new(
            V2::new(10.0 + 8.0 * i as f64, 50.0),
            V2::new(2.0, 4.0),
        ));
    }
    let map: Arc<dyn SceneMap> = map;

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let map = map.clone();
            thread::spawn(move || -> Result<Vec<(f64, f64)>> {
                let mut lengths = vec![];
                for i in 0..200 {
                    // Alternate sides so the cached edges keep being queried
                    // from different points.
                    let (origin, direction, expected) = if (i + t) % 2 == 0 {
                        (V2::new(0.0, 50.5), V2::new(1.0, 0.0), 9.0)
                    } else {
                        (V2::new(99.0, 50.5), V2::new(-1.0, 0.0), 16.0)
                    };
                    let cast = RaycastBuilder::new()
                        .map(map.clone())
                        .origin(origin)
                        .direction(direction)
                        .calculate()?;
                    lengths.push((expected, cast.length()));
                }
                Ok(lengths)
            })
        })
        .collect();

    for handle in handles {
        let lengths = handle.join().expect("caster thread panicked")?;
        for (expected, length) in lengths {
            assert_relative_eq!(length, expected);
        }
    }

    CollisionConfig::default().install();
    Ok(())
}
