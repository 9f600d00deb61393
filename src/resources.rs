//! Emergency resources and therapist directory
//!
//! Static support information printed by the `resources` subcommand.

use console::Style;

/// One therapist directory entry
struct Therapist {
    name: &'static str,
    location: &'static str,
}

const THERAPISTS: &[Therapist] = &[
    Therapist {
        name: "Dr. Amit Sharma",
        location: "New Delhi, Delhi",
    },
    Therapist {
        name: "Dr. Ajit Dandekar",
        location: "Raghunath Nagar, Bhopal",
    },
    Therapist {
        name: "Dr. Mimansa Singh Tanwar",
        location: "Indore",
    },
    Therapist {
        name: "Dr. Shraboni Nandi",
        location: "New Delhi, Delhi",
    },
    Therapist {
        name: "Dr. G B Singh",
        location: "Delhi",
    },
    Therapist {
        name: "Dr. Murali Raj",
        location: "Shivaji Market, Pune",
    },
    Therapist {
        name: "Dr. Vipul Rastogi",
        location: "Shri Ram Colony, Bhopal",
    },
    Therapist {
        name: "Dr. Karuna Singh",
        location: "Udaipur",
    },
    Therapist {
        name: "Dr. Dipti Yadav",
        location: "Nilami Society, Ahmedabad",
    },
    Therapist {
        name: "Dr. Kratu Sharma",
        location: "Gandhinagar Highway, Ahmedabad",
    },
];

/// Print helplines and the therapist directory
pub fn print_resources() {
    let bold = Style::new().bold();
    let red = Style::new().red().bold();
    let dim = Style::new().dim();

    println!("{}", red.apply_to("Emergency Helplines"));
    println!("  National Crisis Helpline: 988");
    println!("  Emergency Services: 911");
    println!("  Crisis Text Line: text HOME to 741741");
    println!();
    println!("{}", bold.apply_to("Find a Therapist"));
    for therapist in THERAPISTS {
        println!(
            "  {}  {}",
            bold.apply_to(therapist.name),
            dim.apply_to(therapist.location)
        );
    }
    println!();
    println!(
        "{}",
        dim.apply_to("If you are in immediate danger, contact your local emergency room.")
    );
}
