use super::*;
use crate::draw::DrawBackend;
use crate::manager::{ManagerId, RenderManager};
use crate::primitives::{
    ImageHandle, ImagePrimitive, LinePrimitive, PointPrimitive, TextPrimitive,
};
use crate::render_loop::RenderLoop;
use crate::section::{channel, RendererController};
use crate::update::UpdateTypes;
use skymap_common::{Color, LayerId};
use skymap_units::{GeocentricCoordinates, Vector3};

fn at(x: f32, y: f32, z: f32) -> GeocentricCoordinates {
    GeocentricCoordinates::new(x, y, z)
}

fn label(text: &str, location: GeocentricCoordinates) -> TextPrimitive {
    TextPrimitive::new(location, text, Color::WHITE)
}

fn setup() -> (RendererController, RenderStore, RenderManager<TextPrimitive>) {
    let (controller, _queue) = channel();
    let mut store = RenderStore::new();
    let mut section = controller.create_atomic();
    let manager = section.create_label_manager(LayerId(3));
    manager.queue_objects(
        vec![label("Vega", at(1.0, 0.0, 0.0)), label("Deneb", at(0.0, 1.0, 0.0))],
        UpdateTypes::RESET,
        &mut section,
    );
    store.apply(section);
    (controller, store, manager)
}

#[test]
fn created_manager_holds_first_objects() {
    let (_controller, store, manager) = setup();
    let state = store.manager::<TextPrimitive>(manager.id()).unwrap();
    assert_eq!(state.layer, LayerId(3));
    assert!(state.enabled);
    assert_eq!(state.objects.len(), 2);
    assert_eq!(state.revision, 1);
    assert_eq!(store.sections_applied(), 1);
    assert_eq!(store.manager_count(), 1);
}

#[test]
fn reset_replaces_objects() {
    let (controller, mut store, manager) = setup();
    let mut section = controller.create_atomic();
    manager.queue_objects(
        vec![label("Altair", at(0.0, 0.0, 1.0)), label("Albireo", at(1.0, 0.0, 0.0))],
        UpdateTypes::RESET,
        &mut section,
    );
    store.apply(section);

    let state = store.manager::<TextPrimitive>(manager.id()).unwrap();
    let names: Vec<_> = state.objects.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(names, ["Altair", "Albireo"]);
    assert_eq!(state.revision, 2);
}

#[test]
fn position_update_patches_in_place() {
    let (controller, mut store, manager) = setup();
    let mut section = controller.create_atomic();
    manager.queue_objects(
        vec![label("ignored", at(0.0, 0.0, 1.0)), label("ignored", at(0.0, 0.0, -1.0))],
        UpdateTypes::UPDATE_POSITIONS,
        &mut section,
    );
    store.apply(section);

    let state = store.manager::<TextPrimitive>(manager.id()).unwrap();
    assert_eq!(state.objects[0].text, "Vega");
    assert_eq!(state.objects[0].location, at(0.0, 0.0, 1.0));
    assert_eq!(state.objects[1].text, "Deneb");
    assert_eq!(state.objects[1].location, at(0.0, 0.0, -1.0));
}

#[test]
fn position_update_with_new_count_replaces() {
    let (controller, mut store, manager) = setup();
    let mut section = controller.create_atomic();
    manager.queue_objects(
        vec![label("Polaris", at(0.0, 0.0, 1.0))],
        UpdateTypes::UPDATE_POSITIONS,
        &mut section,
    );
    store.apply(section);

    let state = store.manager::<TextPrimitive>(manager.id()).unwrap();
    assert_eq!(state.objects.len(), 1);
    assert_eq!(state.objects[0].text, "Polaris");
}

#[test]
fn image_update_swaps_image_and_keeps_position() {
    let (controller, _queue) = channel();
    let mut store = RenderStore::new();
    let up = Vector3::Z;
    let mut section = controller.create_atomic();
    let manager = section.create_image_manager(LayerId(0));
    manager.queue_objects(
        vec![ImagePrimitive::new(at(1.0, 0.0, 0.0), ImageHandle::new("moon0"), up, 0.1)],
        UpdateTypes::RESET,
        &mut section,
    );
    store.apply(section);

    let mut section = controller.create_atomic();
    let mut next = ImagePrimitive::new(at(0.0, 1.0, 0.0), ImageHandle::new("moon1"), up, 0.1);
    next.requires_blending = true;
    manager.queue_objects(vec![next], UpdateTypes::UPDATE_IMAGES, &mut section);
    store.apply(section);

    let state = store.manager::<ImagePrimitive>(manager.id()).unwrap();
    assert_eq!(state.objects[0].image.as_str(), "moon1");
    assert!(state.objects[0].requires_blending);
    assert_eq!(state.objects[0].location, at(1.0, 0.0, 0.0));
}

#[test]
fn empty_batch_keeps_manager() {
    let (controller, mut store, manager) = setup();
    let mut section = controller.create_atomic();
    manager.queue_objects(Vec::new(), UpdateTypes::RESET, &mut section);
    store.apply(section);

    let state = store.manager::<TextPrimitive>(manager.id()).unwrap();
    assert!(state.objects.is_empty());
    assert_eq!(store.manager_count(), 1);
}

#[derive(Default)]
struct Recorder {
    labels: Vec<(LayerId, usize)>,
    lines: Vec<(LayerId, usize)>,
    frames: usize,
}

impl DrawBackend for Recorder {
    fn draw_lines(&mut self, layer: LayerId, lines: &[LinePrimitive]) {
        self.lines.push((layer, lines.len()));
    }

    fn draw_points(&mut self, _layer: LayerId, _points: &[PointPrimitive]) {}

    fn draw_images(&mut self, _layer: LayerId, _images: &[ImagePrimitive]) {}

    fn draw_labels(&mut self, layer: LayerId, labels: &[TextPrimitive]) {
        self.labels.push((layer, labels.len()));
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

#[test]
fn disabled_manager_is_not_drawn() {
    let (controller, mut store, manager) = setup();
    let mut recorder = Recorder::default();
    store.draw(&mut recorder);
    assert_eq!(recorder.labels, [(LayerId(3), 2)]);

    let mut section = controller.create_atomic();
    manager.queue_enabled(false, &mut section);
    store.apply(section);

    let mut recorder = Recorder::default();
    store.draw(&mut recorder);
    assert!(recorder.labels.is_empty());
    assert_eq!(recorder.frames, 1);
    assert!(!store.manager::<TextPrimitive>(manager.id()).unwrap().enabled);
}

#[test]
fn draw_orders_managers_by_layer() {
    let (controller, _queue) = channel();
    let mut store = RenderStore::new();
    let mut section = controller.create_atomic();
    let line = |n: usize| {
        LinePrimitive::new(Color::WHITE, 1.0, vec![at(1.0, 0.0, 0.0); n.max(2)])
    };
    let high = section.create_line_manager(LayerId(5));
    let low = section.create_line_manager(LayerId(-110));
    high.queue_objects(vec![line(2)], UpdateTypes::RESET, &mut section);
    low.queue_objects(vec![line(2), line(3)], UpdateTypes::RESET, &mut section);
    store.apply(section);

    let mut recorder = Recorder::default();
    store.draw(&mut recorder);
    assert_eq!(recorder.lines, [(LayerId(-110), 2), (LayerId(5), 1)]);
}

#[test]
#[should_panic(expected = "no text render manager")]
fn unknown_manager_is_a_fault() {
    let (controller, mut store, _manager) = setup();
    let (other, _queue) = channel();
    // Ids from another renderer's allocator are meaningless here.
    let mut foreign = other.create_atomic();
    let _ = foreign.create_point_manager(LayerId(0));
    let stray = foreign.create_label_manager(LayerId(0));

    let mut section = controller.create_atomic();
    stray.queue_objects(vec![label("x", at(1.0, 0.0, 0.0))], UpdateTypes::RESET, &mut section);
    assert_eq!(stray.id(), ManagerId(1));
    store.apply(section);
}

#[test]
#[should_panic(expected = "created twice")]
fn duplicate_create_is_a_fault() {
    let (_controller, mut store, _manager) = setup();
    let (other, _queue) = channel();
    let mut section = other.create_atomic();
    // Same id as the manager `setup` created.
    let _ = section.create_label_manager(LayerId(9));
    store.apply(section);
}

/// Tags every kind with one generation number per section.
#[derive(Default)]
struct GenerationRecorder {
    current: Vec<u32>,
    frames: Vec<Vec<u32>>,
}

impl DrawBackend for GenerationRecorder {
    fn begin_frame(&mut self) {
        self.current.clear();
    }

    fn draw_lines(&mut self, _layer: LayerId, lines: &[LinePrimitive]) {
        self.current.extend(lines.iter().map(|l| l.line_width as u32));
    }

    fn draw_points(&mut self, _layer: LayerId, points: &[PointPrimitive]) {
        self.current.extend(points.iter().map(|p| p.size));
    }

    fn draw_images(&mut self, _layer: LayerId, images: &[ImagePrimitive]) {
        self.current
            .extend(images.iter().filter_map(|i| i.image.as_str().parse::<u32>().ok()));
    }

    fn draw_labels(&mut self, _layer: LayerId, labels: &[TextPrimitive]) {
        self.current
            .extend(labels.iter().filter_map(|t| t.text.parse::<u32>().ok()));
    }

    fn end_frame(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
    }
}

#[test]
fn frames_never_mix_sections() {
    const GENERATIONS: u32 = 200;
    let (controller, queue) = channel();

    let producer = std::thread::spawn(move || {
        let mut section = controller.create_atomic();
        let text = section.create_label_manager(LayerId(1));
        let points = section.create_point_manager(LayerId(1));
        let lines = section.create_line_manager(LayerId(1));
        let images = section.create_image_manager(LayerId(1));

        for generation in 1..=GENERATIONS {
            let p = at(1.0, 0.0, 0.0);
            text.queue_objects(
                vec![label(&generation.to_string(), p); 3],
                UpdateTypes::RESET,
                &mut section,
            );
            points.queue_objects(
                vec![PointPrimitive::new(p, Color::WHITE, generation); 3],
                UpdateTypes::RESET,
                &mut section,
            );
            lines.queue_objects(
                vec![LinePrimitive::new(Color::WHITE, generation as f32, vec![p, p])],
                UpdateTypes::RESET,
                &mut section,
            );
            images.queue_objects(
                vec![ImagePrimitive::new(
                    p,
                    ImageHandle::new(generation.to_string()),
                    Vector3::Z,
                    0.1,
                )],
                UpdateTypes::RESET,
                &mut section,
            );
            controller.queue_atomic(section).unwrap();
            section = controller.create_atomic();
        }
    });

    let mut render = RenderLoop::new(queue, 1);
    let mut recorder = GenerationRecorder::default();
    while !render.producers_finished() {
        render.frame(&mut recorder);
    }
    producer.join().unwrap();

    let mut last = 0;
    for frame in &recorder.frames {
        let Some(&first) = frame.first() else {
            continue;
        };
        assert_eq!(frame.len(), 8, "frame missing a kind: {frame:?}");
        assert!(frame.iter().all(|&g| g == first), "mixed frame: {frame:?}");
        assert!(first >= last, "generation went backwards");
        last = first;
    }
    assert_eq!(last, GENERATIONS);
}
