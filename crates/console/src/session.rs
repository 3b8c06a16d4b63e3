//! Interactive session: collect pallets and boxes, then print the report.

use std::io::{BufRead, Write};

use warehouse_core::{BoxId, Entity, PalletId};
use warehouse_inventory::{CargoBox, Dimensions, Pallet};

use crate::config::Config;
use crate::error::ConsoleResult;
use crate::prompt::Prompter;
use crate::render::{Report, write_report};

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            config,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Collect pallets, print the report and hand the pallets back.
    pub fn run(&mut self) -> ConsoleResult<Vec<Pallet>> {
        let pallets = self.collect_pallets()?;

        let report = Report::build(&pallets, self.config.top_n);
        write_report(&report, self.config.report_format, self.prompter.output())?;
        self.prompter.output().flush()?;

        Ok(pallets)
    }

    /// Pallets are numbered from 1 in the order they are entered.
    pub fn collect_pallets(&mut self) -> ConsoleResult<Vec<Pallet>> {
        let count = self
            .prompter
            .positive_count("Enter the number of pallets to create:")?;

        let mut pallets = Vec::new();
        for n in 1..=count {
            pallets.push(self.read_pallet(PalletId::new(n as i64))?);
        }
        tracing::info!(pallets = pallets.len(), "pallets collected");
        Ok(pallets)
    }

    fn read_pallet(&mut self, id: PalletId) -> ConsoleResult<Pallet> {
        self.prompter.say(format_args!("\nCreating pallet {id}"))?;
        let dimensions = self.read_dimensions("pallet", "pallet weight (without boxes)")?;
        let mut pallet = Pallet::new(id, dimensions);

        let count = self
            .prompter
            .positive_count("Enter the number of boxes on the pallet:")?;
        for n in 1..=count {
            self.read_box_onto(&mut pallet, BoxId::new(n as i64))?;
        }
        Ok(pallet)
    }

    /// Ask for a box until one is built and fits on `pallet`.
    fn read_box_onto(&mut self, pallet: &mut Pallet, id: BoxId) -> ConsoleResult<()> {
        loop {
            self.prompter.say(format_args!("\nCreating box {id}"))?;
            let dimensions = self.read_dimensions("box", "box weight")?;
            let expiry = self
                .prompter
                .optional_date("Enter the expiry date (YYYY-MM-DD) or leave empty:")?;
            let production = self
                .prompter
                .optional_date("Enter the production date (YYYY-MM-DD) or leave empty:")?;

            let placed = CargoBox::new(id, dimensions, expiry, production)
                .and_then(|cargo_box| pallet.add_box(cargo_box));
            match placed {
                Ok(()) => return Ok(()),
                Err(err) => {
                    tracing::warn!(
                        pallet_id = %pallet.id(),
                        box_id = %id,
                        error = %err,
                        "box rejected"
                    );
                    self.prompter
                        .say(format_args!("Box rejected: {err}. Enter it again."))?;
                }
            }
        }
    }

    fn read_dimensions(&mut self, noun: &str, weight_label: &str) -> ConsoleResult<Dimensions> {
        let width = self.prompter.positive_f64(&format!("Enter the {noun} width:"))?;
        let height = self.prompter.positive_f64(&format!("Enter the {noun} height:"))?;
        let depth = self.prompter.positive_f64(&format!("Enter the {noun} depth:"))?;
        let weight = self.prompter.positive_f64(&format!("Enter the {weight_label}:"))?;

        Ok(Dimensions::new(width, height, depth, weight)?)
    }
}
