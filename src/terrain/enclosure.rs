//! Enclosure analysis: landlocked lowland pockets become mountains.

use super::Terrain;

const CARDINAL: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Promotes every 4-connected plain/hill component that touches neither the
/// grid boundary nor any water cell to mountain, in place.
///
/// Uses an explicit stack and a shared visited bitmap; cells are marked when
/// pushed so each one is traversed exactly once. Losing the enclosed flag
/// never stops traversal: the component must still be collected in full so a
/// later scan does not rediscover it. The result is independent of scan and
/// traversal order.
pub fn resolve_enclosed(width: u32, terrain: &mut [Terrain]) {
    let w = width as usize;
    assert_eq!(terrain.len(), w * w, "terrain grid must be {w}x{w}");

    let mut visited = vec![false; terrain.len()];
    let mut stack: Vec<usize> = Vec::new();
    let mut members: Vec<usize> = Vec::new();

    for start in 0..terrain.len() {
        if visited[start] || !terrain[start].is_lowland() {
            continue;
        }

        stack.clear();
        members.clear();
        let mut enclosed = true;

        visited[start] = true;
        stack.push(start);

        while let Some(idx) = stack.pop() {
            members.push(idx);
            let x = (idx % w) as i32;
            let y = (idx / w) as i32;

            for (dx, dy) in CARDINAL {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= w as i32 {
                    // Component reaches the map edge.
                    enclosed = false;
                    continue;
                }
                let nidx = ny as usize * w + nx as usize;
                if visited[nidx] {
                    continue;
                }
                match terrain[nidx] {
                    Terrain::Plain | Terrain::Hill => {
                        visited[nidx] = true;
                        stack.push(nidx);
                    }
                    // Water borders the component but is never a member.
                    Terrain::Water => enclosed = false,
                    _ => {}
                }
            }
        }

        if enclosed {
            for &idx in &members {
                terrain[idx] = Terrain::Mountain;
            }
        }
    }
}
