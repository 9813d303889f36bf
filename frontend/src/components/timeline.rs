use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::TIMELINE_STEPS;
use crate::timeline::{active_step_count, is_step_active, scroll_progress, TimelineGeometry};

fn measure(container: &NodeRef) -> Option<TimelineGeometry> {
    let element = container.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    Some(TimelineGeometry {
        top: rect.top(),
        bottom: rect.bottom(),
        viewport_height,
    })
}

fn update_progress(container: &NodeRef, progress: &UseStateHandle<f64>) {
    if let Some(geometry) = measure(container) {
        progress.set(scroll_progress(geometry));
    }
}

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let container = use_node_ref();
    let progress = use_state_eq(|| 0.0_f64);
    // set while an animation frame is queued, further events are dropped
    let ticking = use_mut_ref(|| false);
    let frame_id: Rc<RefCell<Option<i32>>> = use_mut_ref(|| None);

    let schedule = {
        let container = container.clone();
        let progress = progress.clone();
        let ticking = ticking.clone();
        let frame_id = frame_id.clone();
        Rc::new(move || {
            if *ticking.borrow() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            *ticking.borrow_mut() = true;

            let on_frame = Closure::once_into_js({
                let container = container.clone();
                let progress = progress.clone();
                let ticking = ticking.clone();
                let frame_id = frame_id.clone();
                move || {
                    *frame_id.borrow_mut() = None;
                    update_progress(&container, &progress);
                    *ticking.borrow_mut() = false;
                }
            });
            match window.request_animation_frame(on_frame.unchecked_ref()) {
                Ok(id) => *frame_id.borrow_mut() = Some(id),
                Err(_) => *ticking.borrow_mut() = false,
            }
        })
    };

    {
        let schedule = schedule.clone();
        use_event_with_window("scroll", move |_: Event| schedule());
    }
    {
        let schedule = schedule.clone();
        use_event_with_window("resize", move |_: Event| schedule());
    }

    // Initial measurement, and drop any queued frame on unmount
    {
        let container = container.clone();
        let progress = progress.clone();
        let frame_id = frame_id.clone();
        use_effect_with_deps(
            move |_| {
                update_progress(&container, &progress);
                move || {
                    if let Some(id) = frame_id.borrow_mut().take() {
                        if let Some(window) = web_sys::window() {
                            let _ = window.cancel_animation_frame(id);
                        }
                    }
                }
            },
            (),
        );
    }

    let step_count = TIMELINE_STEPS.len();
    let rail_style = format!("height: {:.2}%;", *progress * 100.0);
    let reached = format!(
        "{} of {} steps reached",
        active_step_count(*progress, step_count),
        step_count
    );

    html! {
        <section class="timeline-section">
            <div class="section-inner narrow">
                <h2 class="section-title">{"7-Day Execution Program"}</h2>
                <p class="section-subtitle">{"A structured journey from idea to validated prototype"}</p>

                <div class="timeline" ref={container}>
                    <div class="timeline-rail" role="progressbar" aria-label={reached}>
                        <div class="timeline-rail-fill" style={rail_style}></div>
                    </div>
                    <div class="timeline-steps">
                        { for TIMELINE_STEPS.iter().enumerate().map(|(index, step)| {
                            let active = is_step_active(*progress, index, step_count);
                            html! {
                                <div key={step.day} class={classes!("timeline-step", active.then(|| "active"))}>
                                    <div class="timeline-icon">
                                        <span>{step.icon.glyph()}</span>
                                    </div>
                                    <div class="timeline-body">
                                        <span class="timeline-day">{step.day}</span>
                                        <h3>{step.title}</h3>
                                        <p>{step.description}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .timeline {
                    position: relative;
                }

                .timeline-rail {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    left: 27px;
                    width: 2px;
                    background: rgba(120, 3, 138, 0.15);
                }

                .timeline-rail-fill {
                    width: 100%;
                    background: var(--brand);
                    box-shadow: 0 0 12px rgba(177, 13, 201, 0.6);
                    transition: height 0.1s linear;
                }

                .timeline-steps {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .timeline-step {
                    position: relative;
                    display: flex;
                    gap: 1.5rem;
                }

                .timeline-icon {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-shrink: 0;
                    align-items: center;
                    justify-content: center;
                    width: 56px;
                    height: 56px;
                    border-radius: 12px;
                    border: 1px solid rgba(120, 3, 138, 0.3);
                    background: rgba(120, 3, 138, 0.1);
                    color: rgba(120, 3, 138, 0.6);
                    font-size: 1.4rem;
                    transition: all 0.5s ease-out;
                }

                .timeline-step.active .timeline-icon {
                    border-color: var(--brand);
                    background: var(--brand);
                    color: #fff;
                    transform: scale(1.1);
                    box-shadow: 0 0 30px rgba(177, 13, 201, 0.6), 0 0 15px rgba(177, 13, 201, 0.4);
                }

                .timeline-step.active .timeline-icon span {
                    filter: drop-shadow(0 0 5px rgba(255, 255, 255, 0.8));
                }

                .timeline-body {
                    padding-top: 0.5rem;
                }

                .timeline-day {
                    display: inline-block;
                    margin-bottom: 0.25rem;
                    padding: 0.125rem 0.5rem;
                    border-radius: 4px;
                    font-size: 0.75rem;
                    background: var(--secondary);
                    color: var(--muted-foreground);
                    transition: color 0.5s, background 0.5s;
                }

                .timeline-step.active .timeline-day {
                    background: rgba(120, 3, 138, 0.2);
                    color: var(--brand);
                }

                .timeline-body h3 {
                    margin: 0;
                    font-size: 1.125rem;
                    color: var(--muted-foreground);
                    transform-origin: left;
                    transition: all 0.5s;
                }

                .timeline-step.active .timeline-body h3 {
                    color: var(--foreground);
                    transform: scale(1.05);
                }

                .timeline-body p {
                    margin: 0.25rem 0 0;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                    transition: color 0.5s;
                }

                .timeline-step.active .timeline-body p {
                    color: var(--foreground);
                    opacity: 0.8;
                }
                "#}
            </style>
        </section>
    }
}
