use crate::gpu::Renderer;
use crate::scene::{OrbitCamera, SceneGraph, Theme};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

/// Props for the 3D stage
#[derive(Properties, Clone, PartialEq)]
pub struct StageCanvasProps {
    /// Theme selecting the decorative model
    #[prop_or_default]
    pub theme: Theme,

    #[prop_or_default]
    pub class: Classes,
}

/// Everything the frame loop touches
struct Stage {
    renderer: Option<Renderer>,
    scene: SceneGraph,
    camera: OrbitCamera,
    frame: Option<AnimationFrame>,
    /// Last pointer position while dragging
    drag: Option<(i32, i32)>,
    running: bool,
}

impl Stage {
    fn new() -> Self {
        Self {
            renderer: None,
            scene: SceneGraph::new(),
            camera: OrbitCamera::default(),
            frame: None,
            drag: None,
            running: false,
        }
    }

    fn draw(&mut self) {
        self.scene.advance_frame();
        self.camera.update();
        let Stage {
            renderer,
            scene,
            camera,
            ..
        } = self;
        if let Some(renderer) = renderer {
            if let Err(e) = renderer.render(scene, camera) {
                log::error!("Render error: {}", e);
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(width, height);
        }
    }
}

/// Queue the next animation frame; the loop ends once `running` is cleared
fn schedule_frame(stage: &Rc<RefCell<Stage>>) {
    let next = stage.clone();
    let handle = request_animation_frame(move |_| {
        {
            let mut stage = next.borrow_mut();
            stage.frame = None;
            if !stage.running {
                return;
            }
            stage.draw();
        }
        schedule_frame(&next);
    });
    stage.borrow_mut().frame = Some(handle);
}

/// Size the canvas backing store to its container
fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let (width, height) = canvas
        .parent_element()
        .map(|parent| (parent.client_width(), parent.client_height()))
        .filter(|&(w, h)| w > 0 && h > 0)
        .unwrap_or((canvas.client_width(), canvas.client_height()));
    let width = width.max(1) as u32;
    let height = height.max(1) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}

/// Rotating 3D model rendered through wgpu, orbitable with the mouse
#[function_component(StageCanvas)]
pub fn stage_canvas(props: &StageCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let stage = use_mut_ref(Stage::new);

    // Swap the model whenever the theme changes
    {
        let stage = stage.clone();
        use_effect_with(props.theme, move |theme| {
            stage.borrow_mut().scene.set_theme(*theme);
            || ()
        });
    }

    // Renderer, frame loop and window listeners live as long as the component
    {
        let canvas_ref = canvas_ref.clone();
        let stage = stage.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();

            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let (width, height) = fit_canvas(&canvas);
                {
                    let mut s = stage.borrow_mut();
                    s.camera.set_viewport(width, height);
                    s.running = true;
                }

                let init_stage = stage.clone();
                let surface_canvas = canvas.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match Renderer::new(surface_canvas).await {
                        Ok(renderer) => init_stage.borrow_mut().renderer = Some(renderer),
                        Err(e) => log::error!("Failed to create renderer: {}", e),
                    }
                });
                schedule_frame(&stage);

                let window = gloo_utils::window();
                listeners.push({
                    let stage = stage.clone();
                    EventListener::new(&window, "resize", move |_| {
                        let (width, height) = fit_canvas(&canvas);
                        stage.borrow_mut().resize(width, height);
                    })
                });
                listeners.push({
                    let stage = stage.clone();
                    EventListener::new(&window, "mousemove", move |event| {
                        let Some(mouse_event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let mut s = stage.borrow_mut();
                        if let Some((x, y)) = s.drag {
                            let (cx, cy) = (mouse_event.client_x(), mouse_event.client_y());
                            let height = s.renderer.as_ref().map(|r| r.height()).unwrap_or(1) as f32;
                            s.camera.drag((cx - x) as f32, (cy - y) as f32, height);
                            s.drag = Some((cx, cy));
                        }
                    })
                });
                listeners.push({
                    let stage = stage.clone();
                    EventListener::new(&window, "mouseup", move |_| {
                        stage.borrow_mut().drag = None;
                    })
                });
            } else {
                log::error!("Stage canvas not mounted");
            }

            move || {
                let mut s = stage.borrow_mut();
                s.running = false;
                s.frame.take();
                s.renderer.take();
                drop(listeners);
            }
        });
    }

    let onmousedown = {
        let stage = stage.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            stage.borrow_mut().drag = Some((e.client_x(), e.client_y()));
        })
    };

    html! {
        <div class={classes!("stage", props.class.clone())} style="width: 100%; height: 100%;">
            <canvas
                ref={canvas_ref}
                {onmousedown}
                style="display: block; width: 100%; height: 100%; cursor: grab;"
            />
        </div>
    }
}
