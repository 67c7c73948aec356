use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Total count-up duration.
const DURATION_MS: u32 = 2000;
/// Tick interval, roughly one frame at 60fps.
const TICK_MS: u32 = 16;

/// Accumulating count-up state. The interval callback is the only writer;
/// the displayed value never decreases and never passes the target.
pub struct CountUp {
    target: u32,
    acc: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            acc: 0.0,
            done: false,
        }
    }

    /// Advances one tick and returns the value to display. The tick that
    /// reaches the target clamps exactly to it; later ticks are no-ops.
    pub fn tick(&mut self) -> u32 {
        if self.done {
            return self.target;
        }
        let increment = self.target as f64 / (DURATION_MS as f64 / TICK_MS as f64);
        self.acc += increment;
        if self.acc >= self.target as f64 {
            self.done = true;
            self.target
        } else {
            self.acc.floor() as u32
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

pub fn format_value(prefix: &str, value: u32, suffix: &str) -> String {
    format!("{}{}{}", prefix, value, suffix)
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    pub label: String,
    #[prop_or_else(|| "+".to_string())]
    pub prefix: String,
    #[prop_or_default]
    pub suffix: String,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let displayed = use_state(|| 0u32);

    {
        let displayed = displayed.clone();
        use_effect_with_deps(
            move |target| {
                // Restarting on a new target goes back through zero.
                displayed.set(0);
                let count_up = Rc::new(RefCell::new(CountUp::new(*target)));

                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();

                let interval = Interval::new(TICK_MS, move || {
                    let value = count_up.borrow_mut().tick();
                    displayed.set(value);
                    if count_up.borrow().is_done() {
                        if let Some(interval) = interval_handle.borrow_mut().take() {
                            drop(interval);
                        }
                    }
                });
                *interval_handle_clone.borrow_mut() = Some(interval);

                move || {
                    // Stop ticking on unmount even mid-animation.
                    if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            props.target,
        );
    }

    html! {
        <div class="stat-counter">
            <div class="stat-value">{ format_value(&props.prefix, *displayed, &props.suffix) }</div>
            <div class="stat-label">{ &props.label }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(target: u32) -> Vec<u32> {
        let mut count_up = CountUp::new(target);
        let mut values = Vec::new();
        for _ in 0..10_000 {
            values.push(count_up.tick());
            if count_up.is_done() {
                return values;
            }
        }
        panic!("count-up to {} never finished", target);
    }

    #[test]
    fn ends_exactly_on_target() {
        for target in [0, 1, 7, 120, 1500, 987_654] {
            let values = run_to_completion(target);
            assert_eq!(*values.last().unwrap(), target);
        }
    }

    #[test]
    fn never_decreases_and_never_overshoots() {
        for target in [1, 7, 120, 1500] {
            let values = run_to_completion(target);
            let mut previous = 0;
            for value in values {
                assert!(value >= previous, "value dropped from {} to {}", previous, value);
                assert!(value <= target, "value {} passed target {}", value, target);
                previous = value;
            }
        }
    }

    #[test]
    fn finishes_within_expected_tick_count() {
        // duration / interval ticks, plus one tick of slack for float
        // rounding in the accumulator.
        let max_ticks = (DURATION_MS as f64 / TICK_MS as f64).ceil() as usize + 1;
        for target in [1, 7, 120, 1500, 987_654] {
            let ticks = run_to_completion(target).len();
            assert!(ticks <= max_ticks, "{} ticks for target {}", ticks, target);
        }
    }

    #[test]
    fn zero_target_completes_on_first_tick() {
        let mut count_up = CountUp::new(0);
        assert_eq!(count_up.tick(), 0);
        assert!(count_up.is_done());
    }

    #[test]
    fn formats_prefix_and_suffix() {
        assert_eq!(format_value("+", 1500, ""), "+1500");
        assert_eq!(format_value("", 120, "%"), "120%");
        assert_eq!(format_value("", 0, ""), "0");
    }
}
