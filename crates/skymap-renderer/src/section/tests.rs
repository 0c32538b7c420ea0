use super::*;
use crate::error::RendererError;
use crate::primitives::{PointPrimitive, TextPrimitive};
use crate::update::UpdateTypes;
use skymap_common::{Color, LayerId, PrimitiveKind};
use skymap_units::GeocentricCoordinates;

fn label(text: &str) -> TextPrimitive {
    TextPrimitive::new(GeocentricCoordinates::new(1.0, 0.0, 0.0), text, Color::WHITE)
}

#[test]
fn manager_ids_are_unique_across_sections() {
    let (controller, _queue) = channel();
    let mut first = controller.create_atomic();
    let mut second = controller.create_atomic();

    let a = first.create_label_manager(LayerId(1));
    let b = second.create_point_manager(LayerId(1));
    let c = first.create_line_manager(LayerId(2));

    assert_ne!(a.id(), b.id());
    assert_ne!(b.id(), c.id());
    assert_ne!(a.id(), c.id());
    assert_ne!(first.id(), second.id());
}

#[test]
fn create_op_precedes_objects() {
    let (controller, _queue) = channel();
    let mut section = controller.create_atomic();
    let manager = section.create_label_manager(LayerId(-101));
    manager.queue_objects(vec![label("Orion")], UpdateTypes::RESET, &mut section);

    let ops = section.ops();
    assert_eq!(ops.len(), 2);
    assert!(matches!(
        ops[0],
        RenderOp::CreateManager {
            kind: PrimitiveKind::Text,
            layer: LayerId(-101),
            ..
        }
    ));
    assert!(matches!(&ops[1], RenderOp::Objects(QueuedObjects::Text(b)) if b.objects.len() == 1));
    assert_eq!(ops[0].manager(), ops[1].manager());
}

#[test]
fn empty_update_set_is_queued_as_reset() {
    let (controller, _queue) = channel();
    let mut section = controller.create_atomic();
    let manager = section.create_point_manager(LayerId(0));
    manager.queue_objects(Vec::<PointPrimitive>::new(), UpdateTypes::empty(), &mut section);

    match &section.ops()[1] {
        RenderOp::Objects(queued) => {
            assert_eq!(queued.updates(), UpdateTypes::RESET);
            assert!(queued.is_empty());
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn sections_arrive_in_queue_order() {
    let (controller, mut queue) = channel();
    let ids: Vec<_> = (0..5)
        .map(|_| {
            let section = controller.create_atomic();
            let id = section.id();
            controller.queue_atomic(section).unwrap();
            id
        })
        .collect();

    assert_eq!(queue.pending(), 5);
    let drained: Vec<_> = queue.drain(0).iter().map(AtomicSection::id).collect();
    assert_eq!(drained, ids);
    assert!(queue.try_next().is_none());
}

#[test]
fn drain_respects_limit() {
    let (controller, mut queue) = channel();
    for _ in 0..4 {
        controller.queue_atomic(controller.create_atomic()).unwrap();
    }
    assert_eq!(queue.drain(3).len(), 3);
    assert_eq!(queue.pending(), 1);
    assert_eq!(queue.drain(3).len(), 1);
}

#[test]
fn queue_fails_once_render_side_is_gone() {
    let (controller, queue) = channel();
    drop(queue);
    let section = controller.create_atomic();
    let id = section.id();
    match controller.queue_atomic(section) {
        Err(RendererError::Disconnected(dropped)) => assert_eq!(dropped, id),
        other => panic!("expected disconnect, got {other:?}"),
    }
}

#[test]
fn queue_reports_disconnect_after_draining() {
    let (controller, mut queue) = channel();
    controller.queue_atomic(controller.create_atomic()).unwrap();
    drop(controller);

    assert!(!queue.is_disconnected());
    assert!(queue.try_next().is_some());
    assert!(queue.try_next().is_none());
    assert!(queue.is_disconnected());
}

#[test]
fn clones_share_a_renderer() {
    let (controller, _queue) = channel();
    let (other, _other_queue) = channel();
    assert!(controller.same_renderer(&controller.clone()));
    assert!(!controller.same_renderer(&other));
}
