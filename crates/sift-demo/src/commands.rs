//! Command execution.

use std::io::Write;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use sift::{always, filter, And, Predicate, PredicateExt, RecordEnum};

use crate::cli::{Cli, Command, FilterArgs};
use crate::criteria::{ColorIs, NameContains, SizeIs};
use crate::diag::Diagnostics;
use crate::naive::ProductFilter;
use crate::output::{write_sections, Section};
use crate::product::{load_catalog, sample_catalog, Color, Product, Size};

/// Runs `cli`, writing results to `out` and diagnostics to `diag`.
pub fn run<W, D>(cli: Cli, out: &mut W, diag: &mut Diagnostics<D>) -> Result<()>
where
    W: Write,
    D: Write,
{
    let catalog = match &cli.catalog {
        Some(path) => {
            let catalog = load_catalog(path)?;
            diag.note(format!(
                "loaded {} products from {}",
                catalog.len(),
                path.display()
            ))?;
            catalog
        }
        None => {
            diag.note("using the built-in sample catalog")?;
            sample_catalog()
        }
    };

    let sections = match cli.command {
        None | Some(Command::Demo) => demo(&catalog),
        Some(Command::Filter(args)) if args.naive => naive(&catalog, &args)?,
        Some(Command::Filter(args)) => {
            let predicate = build_predicate(&args)?;
            vec![section(&catalog, predicate.as_ref())]
        }
    };

    if diag.is_enabled() {
        for s in &sections {
            diag.note(format!(
                "{} matched {} of {}",
                s.predicate,
                s.matches.len(),
                catalog.len()
            ))?;
        }
    }

    write_sections(out, cli.format, &sections).context("failed to write results")
}

fn section<'a>(catalog: &'a [Product], predicate: &dyn Predicate<Product>) -> Section<'a> {
    Section {
        predicate: predicate.describe(),
        matches: filter(catalog, predicate),
    }
}

/// The three filters the demo always shows.
fn demo(catalog: &[Product]) -> Vec<Section<'_>> {
    let green = ColorIs(Color::Green);
    let large = SizeIs(Size::Large);
    let green_and_large = green.and(large);

    vec![
        section(catalog, &green),
        section(catalog, &large),
        section(catalog, &green_and_large),
    ]
}

/// ANDs every criterion given on the command line. No criteria matches all.
pub fn build_predicate(args: &FilterArgs) -> Result<Rc<dyn Predicate<Product>>> {
    let mut criteria: Vec<Rc<dyn Predicate<Product>>> = Vec::new();
    if let Some(color) = args.color {
        criteria.push(ColorIs(color).shared());
    }
    if let Some(size) = args.size {
        criteria.push(SizeIs(size).shared());
    }
    if let Some(needle) = &args.name_contains {
        criteria.push(NameContains::new(needle).shared());
    }

    let predicate = match criteria.len() {
        0 => always().shared(),
        1 => criteria.remove(0),
        _ => And::chain(criteria)?.shared(),
    };
    Ok(predicate)
}

fn naive<'a>(catalog: &'a [Product], args: &FilterArgs) -> Result<Vec<Section<'a>>> {
    if args.name_contains.is_some() {
        bail!("--naive has no name filter; ProductFilter would need another method for that");
    }
    let pf = ProductFilter;
    let (label, matches) = match (args.color, args.size) {
        (Some(color), Some(size)) => (
            format!(
                "naive by_size_and_color({}, {})",
                size.label(),
                color.label()
            ),
            pf.by_size_and_color(catalog, size, color),
        ),
        (Some(color), None) => (
            format!("naive by_color({})", color.label()),
            pf.by_color(catalog, color),
        ),
        (None, Some(size)) => (
            format!("naive by_size({})", size.label()),
            pf.by_size(catalog, size),
        ),
        (None, None) => bail!("--naive needs --color, --size or both"),
    };
    Ok(vec![Section {
        predicate: label,
        matches,
    }])
}
