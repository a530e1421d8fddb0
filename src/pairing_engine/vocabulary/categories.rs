//! Themed German → English tables, one per [`Category`].
//!
//! Some words sit in more than one theme (e.g. `fröhlich` is both an emotion
//! and a personality trait); the pool keeps whichever table comes first.
//!
//! [`Category`]: crate::pairing_engine::models::Category

pub const ADJECTIVES: &[(&str, &str)] = &[
    ("groß", "big"),
    ("klein", "small"),
    ("schnell", "fast"),
    ("langsam", "slow"),
    ("hell", "bright"),
    ("dunkel", "dark"),
    ("weich", "soft"),
    ("hart", "hard"),
    ("schwer", "heavy"),
    ("leicht", "light"),
    ("breit", "wide"),
    ("schmal", "narrow"),
    ("tief", "deep"),
    ("flach", "flat"),
    ("sauber", "clean"),
    ("schmutzig", "dirty"),
    ("nass", "wet"),
    ("trocken", "dry"),
    ("süß", "sweet"),
    ("sauer", "sour"),
    ("ruhig", "calm"),
];

pub const ANIMALS: &[(&str, &str)] = &[
    ("der Hund", "the dog"),
    ("die Katze", "the cat"),
    ("das Pferd", "the horse"),
    ("die Kuh", "the cow"),
    ("das Schwein", "the pig"),
    ("das Schaf", "the sheep"),
    ("die Ziege", "the goat"),
    ("der Vogel", "the bird"),
    ("die Maus", "the mouse"),
    ("der Bär", "the bear"),
    ("der Wolf", "the wolf"),
    ("der Fuchs", "the fox"),
    ("der Hase", "the hare"),
    ("die Ente", "the duck"),
    ("das Huhn", "the chicken"),
    ("der Löwe", "the lion"),
    ("der Affe", "the monkey"),
    ("die Schlange", "the snake"),
    ("der Frosch", "the frog"),
    ("die Biene", "the bee"),
];

pub const BODY_PARTS: &[(&str, &str)] = &[
    ("der Kopf", "the head"),
    ("das Gesicht", "the face"),
    ("das Auge", "the eye"),
    ("das Ohr", "the ear"),
    ("die Nase", "the nose"),
    ("der Mund", "the mouth"),
    ("der Zahn", "the tooth"),
    ("die Zunge", "the tongue"),
    ("der Hals", "the neck"),
    ("die Schulter", "the shoulder"),
    ("der Arm", "the arm"),
    ("die Hand", "the hand"),
    ("der Finger", "the finger"),
    ("der Bauch", "the belly"),
    ("der Rücken", "the back"),
    ("das Bein", "the leg"),
    ("das Knie", "the knee"),
    ("der Fuß", "the foot"),
    ("das Herz", "the heart"),
    ("die Haut", "the skin"),
];

pub const BUSINESS: &[(&str, &str)] = &[
    ("das Unternehmen", "the company"),
    ("der Vertrag", "the contract"),
    ("der Umsatz", "the revenue"),
    ("der Gewinn", "the profit"),
    ("der Verlust", "the loss"),
    ("die Rechnung", "the invoice"),
    ("der Kunde", "the customer"),
    ("der Lieferant", "the supplier"),
    ("die Besprechung", "the meeting"),
    ("die Abteilung", "the department"),
    ("der Vorstand", "the board of directors"),
    ("die Aktie", "the share"),
    ("die Steuer", "the tax"),
    ("das Gehalt", "the salary"),
    ("die Bewerbung", "the job application"),
    ("der Termin", "the appointment"),
    ("die Frist", "the deadline"),
    ("das Angebot", "the offer"),
    ("die Nachfrage", "the demand"),
    ("der Markt", "the market"),
];

pub const LEGAL: &[(&str, &str)] = &[
    ("das Gericht", "the court"),
    ("der Richter", "the judge"),
    ("der Anwalt", "the lawyer"),
    ("das Gesetz", "the law"),
    ("die Klage", "the lawsuit"),
    ("der Zeuge", "the witness"),
    ("das Urteil", "the verdict"),
    ("die Strafe", "the penalty"),
    ("der Beweis", "the evidence"),
    ("der Angeklagte", "the defendant"),
    ("der Kläger", "the plaintiff"),
    ("die Haftung", "the liability"),
    ("die Vollmacht", "the power of attorney"),
    ("das Testament", "the will"),
    ("der Eid", "the oath"),
    ("die Berufung", "the appeal"),
    ("die Kaution", "the bail"),
    ("das Recht", "the right"),
    ("die Pflicht", "the duty"),
    ("die Unterschrift", "the signature"),
];

pub const CALENDAR: &[(&str, &str)] = &[
    ("Montag", "Monday"),
    ("Dienstag", "Tuesday"),
    ("Mittwoch", "Wednesday"),
    ("Donnerstag", "Thursday"),
    ("Freitag", "Friday"),
    ("Samstag", "Saturday"),
    ("Sonntag", "Sunday"),
    ("Januar", "January"),
    ("Februar", "February"),
    ("März", "March"),
    ("April", "April"),
    ("Mai", "May"),
    ("Juni", "June"),
    ("Juli", "July"),
    ("August", "August"),
    ("September", "September"),
    ("Oktober", "October"),
    ("November", "November"),
    ("Dezember", "December"),
    ("der Feiertag", "the public holiday"),
    ("das Wochenende", "the weekend"),
];

pub const VERBS: &[(&str, &str)] = &[
    ("laufen", "to run"),
    ("springen", "to jump"),
    ("schwimmen", "to swim"),
    ("fliegen", "to fly"),
    ("werfen", "to throw"),
    ("fangen", "to catch"),
    ("ziehen", "to pull"),
    ("drücken", "to push"),
    ("tragen", "to carry"),
    ("bauen", "to build"),
    ("brechen", "to break"),
    ("schneiden", "to cut"),
    ("waschen", "to wash"),
    ("vergessen", "to forget"),
    ("erinnern", "to remind"),
    ("gewinnen", "to win"),
    ("verlieren", "to lose"),
    ("versuchen", "to try"),
    ("entscheiden", "to decide"),
    ("erklären", "to explain"),
];

pub const EMOTIONS: &[(&str, &str)] = &[
    ("glücklich", "happy"),
    ("traurig", "sad"),
    ("wütend", "angry"),
    ("ängstlich", "anxious"),
    ("überrascht", "surprised"),
    ("enttäuscht", "disappointed"),
    ("stolz", "proud"),
    ("eifersüchtig", "jealous"),
    ("einsam", "lonely"),
    ("gelangweilt", "bored"),
    ("aufgeregt", "excited"),
    ("verlegen", "embarrassed"),
    ("dankbar", "grateful"),
    ("zufrieden", "content"),
    ("nervös", "nervous"),
    ("verwirrt", "confused"),
    ("erleichtert", "relieved"),
    ("fröhlich", "cheerful"),
    ("ruhig", "calm"),
    ("die Angst", "the fear"),
];

pub const PERSONALITY: &[(&str, &str)] = &[
    ("freundlich", "friendly"),
    ("ehrlich", "honest"),
    ("fleißig", "hard-working"),
    ("faul", "lazy"),
    ("geduldig", "patient"),
    ("ungeduldig", "impatient"),
    ("mutig", "brave"),
    ("schüchtern", "shy"),
    ("höflich", "polite"),
    ("unhöflich", "rude"),
    ("großzügig", "generous"),
    ("geizig", "stingy"),
    ("zuverlässig", "reliable"),
    ("neugierig", "curious"),
    ("klug", "clever"),
    ("lustig", "funny"),
    ("ernst", "serious"),
    ("stur", "stubborn"),
    ("bescheiden", "modest"),
    ("fröhlich", "cheerful"),
];
