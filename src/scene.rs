//! Scene assembly: runs the layout engine for each configured container and
//! packages the transform hierarchy plus optional debug boxes.

use anyhow::{Context, Result};
use glam::Vec3;
use roomscene_ui3d::layout::layout;
use roomscene_ui3d::{debug_boxes, DebugBox, DebugLayers, LayoutResult, LayoutTree, Transform3D};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ContainerConfig, SceneLayoutConfig};

/// Everything computed for one container.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerLayout {
    pub name: String,
    pub size: Vec3,
    pub results: Vec<LayoutResult>,
    pub tree: LayoutTree,
    /// World position of each item's origin, index-aligned with `results`.
    pub item_positions: Vec<Vec3>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub debug_boxes: Vec<DebugBox>,
}

/// The laid-out scene.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SceneLayout {
    pub containers: Vec<ContainerLayout>,
}

/// Options that override the config at assembly time.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssembleOptions {
    /// Emit debug boxes for every container.
    pub force_debug: bool,
}

/// Lay out a single container.
pub fn layout_container(container: &ContainerConfig, show_debug: bool) -> Result<ContainerLayout> {
    let input = container
        .layout
        .to_input()
        .with_context(|| format!("Invalid layout for container '{}'", container.name))?;
    let results = layout(&input);
    let tree = LayoutTree::build(Transform3D::new(Vec3::from(container.position)), &results);

    let item_positions = (0..tree.len())
        .filter_map(|i| tree.world_position(i))
        .collect();
    let debug_boxes = if show_debug {
        debug_boxes(input.size, &results, DebugLayers::all())
    } else {
        Vec::new()
    };

    debug!(
        container = %container.name,
        items = results.len(),
        debug_boxes = debug_boxes.len(),
        "container laid out"
    );

    Ok(ContainerLayout {
        name: container.name.clone(),
        size: input.size,
        results,
        tree,
        item_positions,
        debug_boxes,
    })
}

/// Lay out every container in `config`, stopping at the first invalid one.
pub fn assemble(config: &SceneLayoutConfig, options: AssembleOptions) -> Result<SceneLayout> {
    let containers = config
        .containers
        .iter()
        .map(|c| layout_container(c, options.force_debug || config.debug || c.debug))
        .collect::<Result<Vec<_>>>()?;

    info!(containers = containers.len(), "scene layout assembled");
    Ok(SceneLayout { containers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomscene_ui3d::layout::LayoutDescriptor;
    use roomscene_ui3d::LayoutError;

    fn container(name: &str, layout: LayoutDescriptor) -> ContainerConfig {
        ContainerConfig {
            name: name.into(),
            layout,
            ..Default::default()
        }
    }

    #[test]
    fn debug_flag_cascades() {
        let mut config = SceneLayoutConfig {
            debug: false,
            containers: vec![
                container(
                    "plain",
                    LayoutDescriptor {
                        count: 2,
                        ..Default::default()
                    },
                ),
                ContainerConfig {
                    debug: true,
                    ..container(
                        "debugged",
                        LayoutDescriptor {
                            count: 1,
                            ..Default::default()
                        },
                    )
                },
            ],
        };

        let scene = assemble(&config, AssembleOptions::default()).unwrap();
        assert!(scene.containers[0].debug_boxes.is_empty());
        assert_eq!(scene.containers[1].debug_boxes.len(), 3);

        config.debug = true;
        let scene = assemble(&config, AssembleOptions::default()).unwrap();
        assert_eq!(scene.containers[0].debug_boxes.len(), 5);
    }

    #[test]
    fn invalid_container_names_itself() {
        let config = SceneLayoutConfig {
            debug: false,
            containers: vec![container(
                "broken",
                LayoutDescriptor {
                    direction: "w".into(),
                    ..Default::default()
                },
            )],
        };
        let err = assemble(&config, AssembleOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("broken"));
        assert!(err.downcast_ref::<LayoutError>().is_some());
    }

    #[test]
    fn oversized_count_fails_with_container_name() {
        let config = SceneLayoutConfig {
            debug: true,
            containers: vec![container(
                "endless",
                LayoutDescriptor {
                    count: i64::MAX,
                    ..Default::default()
                },
            )],
        };
        let err = assemble(&config, AssembleOptions::default()).unwrap_err();
        assert!(format!("{err:#}").contains("endless"));
        assert!(matches!(
            err.downcast_ref::<LayoutError>(),
            Some(LayoutError::CountTooLarge { .. })
        ));
    }

    #[test]
    fn item_positions_include_container_position() {
        let mut c = container(
            "row",
            LayoutDescriptor {
                count: 2,
                ..Default::default()
            },
        );
        c.position = [0.0, 2.0, 0.0];
        let laid_out = layout_container(&c, false).unwrap();
        assert_eq!(laid_out.item_positions[0], Vec3::new(-2.5, 2.0, 0.0));
        assert_eq!(laid_out.item_positions[1], Vec3::new(2.5, 2.0, 0.0));
    }
}
