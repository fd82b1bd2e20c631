//! PocketCalc application - view adapter over the calculator engine

use egui::{Context, Key};
use pocketcalc_engine::{CalcError, Engine, Op};

pub struct PocketCalcApp {
    engine: Engine,
    error: Option<CalcError>,
    show_about: bool,
}

impl PocketCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            engine: Engine::new(),
            error: None,
            show_about: false,
        }
    }

    /// Latch the first engine error; only AC clears it.
    fn latch<T>(&mut self, result: Result<T, CalcError>) {
        if let Err(err) = result {
            self.error = Some(err);
        }
    }

    fn clear_all(&mut self) {
        self.engine.clear_all();
        self.error = None;
    }

    fn press_digit(&mut self, digit: u8) {
        if self.error.is_some() {
            return;
        }
        let r = self.engine.press_digit(digit);
        self.latch(r);
    }

    fn press_operator(&mut self, op: Op) {
        if self.error.is_some() {
            return;
        }
        let r = self.engine.press_operator(op);
        self.latch(r);
    }

    fn press_equals(&mut self) {
        if self.error.is_some() {
            return;
        }
        let r = self.engine.press_equals();
        self.latch(r);
    }

    fn clear_entry(&mut self) {
        if self.error.is_none() {
            self.engine.clear_entry();
        }
    }

    fn backspace(&mut self) {
        if self.error.is_none() {
            self.engine.backspace();
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // Digit keys (shift+8 is multiply, not a digit)
            for digit in 0..=9u8 {
                if !i.modifiers.shift && i.key_pressed(digit_key(digit)) {
                    self.press_digit(digit);
                }
            }

            // Operators
            if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.press_operator(Op::Add);
            }
            if i.key_pressed(Key::Minus) {
                self.press_operator(Op::Sub);
            }
            if i.modifiers.shift && i.key_pressed(Key::Num8) {
                self.press_operator(Op::Mul);
            }
            if i.key_pressed(Key::Slash) {
                self.press_operator(Op::Div);
            }

            // Enter/equals
            if i.key_pressed(Key::Enter) || i.key_pressed(Key::Equals) {
                self.press_equals();
            }

            // Clear
            if i.key_pressed(Key::Escape) || i.key_pressed(Key::C) {
                self.clear_all();
            }

            if i.key_pressed(Key::Backspace) {
                self.backspace();
            }
        });
    }

    fn render_button(&self, ui: &mut egui::Ui, label: &str, width: f32, height: f32) -> bool {
        ui.add_sized([width, height], egui::Button::new(label)).clicked()
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = 48.0;
        let text = match &self.error {
            Some(_) => "Error",
            None => self.engine.display(),
        };
        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .stroke(ui.visuals().window_stroke)
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_height(display_height);
                ui.set_max_height(display_height);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(text)
                            .font(egui::FontId::proportional(28.0))
                            .strong(),
                    );
                });
            });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let btn_w = (ui.available_width() - 24.0) / 4.0;
        let btn_h = 38.0;

        // Row 1: AC, CE, backspace, /
        ui.horizontal(|ui| {
            if self.render_button(ui, "AC", btn_w, btn_h) { self.clear_all(); }
            if self.render_button(ui, "CE", btn_w, btn_h) { self.clear_entry(); }
            if self.render_button(ui, "⌫", btn_w, btn_h) { self.backspace(); }
            if self.render_button(ui, "÷", btn_w, btn_h) { self.press_operator(Op::Div); }
        });

        // Row 2: 7, 8, 9, *
        ui.horizontal(|ui| {
            if self.render_button(ui, "7", btn_w, btn_h) { self.press_digit(7); }
            if self.render_button(ui, "8", btn_w, btn_h) { self.press_digit(8); }
            if self.render_button(ui, "9", btn_w, btn_h) { self.press_digit(9); }
            if self.render_button(ui, "×", btn_w, btn_h) { self.press_operator(Op::Mul); }
        });

        // Row 3: 4, 5, 6, -
        ui.horizontal(|ui| {
            if self.render_button(ui, "4", btn_w, btn_h) { self.press_digit(4); }
            if self.render_button(ui, "5", btn_w, btn_h) { self.press_digit(5); }
            if self.render_button(ui, "6", btn_w, btn_h) { self.press_digit(6); }
            if self.render_button(ui, "−", btn_w, btn_h) { self.press_operator(Op::Sub); }
        });

        // Row 4: 1, 2, 3, +
        ui.horizontal(|ui| {
            if self.render_button(ui, "1", btn_w, btn_h) { self.press_digit(1); }
            if self.render_button(ui, "2", btn_w, btn_h) { self.press_digit(2); }
            if self.render_button(ui, "3", btn_w, btn_h) { self.press_digit(3); }
            if self.render_button(ui, "+", btn_w, btn_h) { self.press_operator(Op::Add); }
        });

        // Row 5: 0 (double width), = (double width)
        ui.horizontal(|ui| {
            if self.render_button(ui, "0", btn_w * 2.0 + 8.0, btn_h) { self.press_digit(0); }
            if self.render_button(ui, "=", btn_w * 2.0 + 8.0, btn_h) { self.press_equals(); }
        });
    }
}

impl eframe::App for PocketCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("memory", |ui| {
                    if ui.button("MC (clear)").clicked() {
                        self.engine.memory_clear();
                        ui.close_menu();
                    }
                    if ui.button("MR (recall)").clicked() {
                        if self.error.is_none() {
                            self.engine.memory_recall();
                        }
                        ui.close_menu();
                    }
                    if ui.button("M+ (add)").clicked() {
                        if self.error.is_none() {
                            let r = self.engine.memory_add();
                            self.latch(r);
                        }
                        ui.close_menu();
                    }
                    if ui.button("M- (subtract)").clicked() {
                        if self.error.is_none() {
                            let r = self.engine.memory_subtract();
                            self.latch(r);
                        }
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_buttons(ui);
            });

        if self.show_about {
            egui::Window::new("about calculator")
                .collapsible(false)
                .resizable(false)
                .default_width(240.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("pocketcalc");
                        ui.label("four-function integer calculator");
                    });
                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(2.0);
                    ui.label("keys: 0-9 +-*/ Enter Esc");
                    ui.label("AC recovers from Error");
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn digit_key(digit: u8) -> Key {
    match digit {
        1 => Key::Num1,
        2 => Key::Num2,
        3 => Key::Num3,
        4 => Key::Num4,
        5 => Key::Num5,
        6 => Key::Num6,
        7 => Key::Num7,
        8 => Key::Num8,
        9 => Key::Num9,
        _ => Key::Num0,
    }
}
