//! A1 German → English master list, used for level-based selection.
//!
//! Level `n` takes entries `n - 1, n + 19, n + 39, …`, so every level gets a
//! comparable mix of the list.

pub const A1_DE_EN: &[(&str, &str)] = &[
    // 0..40
    ("der Mann", "the man"),
    ("die Frau", "the woman"),
    ("das Kind", "the child"),
    ("der Vater", "the father"),
    ("die Mutter", "the mother"),
    ("der Bruder", "the brother"),
    ("die Schwester", "the sister"),
    ("der Freund", "the friend"),
    ("die Familie", "the family"),
    ("der Sohn", "the son"),
    ("die Tochter", "the daughter"),
    ("das Haus", "the house"),
    ("die Wohnung", "the apartment"),
    ("das Zimmer", "the room"),
    ("die Küche", "the kitchen"),
    ("das Bad", "the bathroom"),
    ("der Tisch", "the table"),
    ("der Stuhl", "the chair"),
    ("das Bett", "the bed"),
    ("die Tür", "the door"),
    ("das Fenster", "the window"),
    ("die Lampe", "the lamp"),
    ("der Schrank", "the cupboard"),
    ("die Stadt", "the city"),
    ("das Dorf", "the village"),
    ("die Straße", "the street"),
    ("der Bahnhof", "the train station"),
    ("der Flughafen", "the airport"),
    ("die Bank", "the bank"),
    ("die Post", "the post office"),
    ("das Geschäft", "the shop"),
    ("der Supermarkt", "the supermarket"),
    ("die Apotheke", "the pharmacy"),
    ("das Krankenhaus", "the hospital"),
    ("die Schule", "the school"),
    ("die Universität", "the university"),
    ("das Büro", "the office"),
    ("die Arbeit", "the work"),
    ("der Beruf", "the profession"),
    ("der Lehrer", "the teacher"),
    // 40..80
    ("der Arzt", "the doctor"),
    ("der Kellner", "the waiter"),
    ("der Student", "the student"),
    ("das Auto", "the car"),
    ("der Bus", "the bus"),
    ("der Zug", "the train"),
    ("das Fahrrad", "the bicycle"),
    ("das Flugzeug", "the airplane"),
    ("das Taxi", "the taxi"),
    ("die Fahrkarte", "the ticket"),
    ("der Koffer", "the suitcase"),
    ("das Hotel", "the hotel"),
    ("der Urlaub", "the vacation"),
    ("das Wetter", "the weather"),
    ("die Sonne", "the sun"),
    ("der Regen", "the rain"),
    ("der Schnee", "the snow"),
    ("der Wind", "the wind"),
    ("das Wasser", "the water"),
    ("das Brot", "the bread"),
    ("die Milch", "the milk"),
    ("der Kaffee", "the coffee"),
    ("der Tee", "the tea"),
    ("das Bier", "the beer"),
    ("der Wein", "the wine"),
    ("der Saft", "the juice"),
    ("das Ei", "the egg"),
    ("der Käse", "the cheese"),
    ("das Fleisch", "the meat"),
    ("der Fisch", "the fish"),
    ("das Obst", "the fruit"),
    ("das Gemüse", "the vegetables"),
    ("der Apfel", "the apple"),
    ("die Kartoffel", "the potato"),
    ("der Reis", "the rice"),
    ("die Suppe", "the soup"),
    ("der Kuchen", "the cake"),
    ("das Frühstück", "the breakfast"),
    ("das Mittagessen", "the lunch"),
    ("das Abendessen", "the dinner"),
    // 80..120
    ("das Restaurant", "the restaurant"),
    ("die Rechnung", "the bill"),
    ("das Geld", "the money"),
    ("der Preis", "the price"),
    ("die Kleidung", "the clothes"),
    ("das Hemd", "the shirt"),
    ("die Hose", "the trousers"),
    ("der Rock", "the skirt"),
    ("das Kleid", "the dress"),
    ("der Schuh", "the shoe"),
    ("die Jacke", "the jacket"),
    ("der Mantel", "the coat"),
    ("die Tasche", "the bag"),
    ("das Buch", "the book"),
    ("die Zeitung", "the newspaper"),
    ("der Brief", "the letter"),
    ("das Handy", "the mobile phone"),
    ("der Computer", "the computer"),
    ("die Uhr", "the clock"),
    ("die Zeit", "the time"),
    ("der Tag", "the day"),
    ("die Woche", "the week"),
    ("der Monat", "the month"),
    ("das Jahr", "the year"),
    ("der Morgen", "the morning"),
    ("der Abend", "the evening"),
    ("die Nacht", "the night"),
    ("heute", "today"),
    ("morgen", "tomorrow"),
    ("gestern", "yesterday"),
    ("jetzt", "now"),
    ("immer", "always"),
    ("nie", "never"),
    ("oft", "often"),
    ("manchmal", "sometimes"),
    ("hier", "here"),
    ("dort", "there"),
    ("links", "left"),
    ("rechts", "right"),
    ("geradeaus", "straight ahead"),
    // 120..160
    ("gehen", "to go"),
    ("kommen", "to come"),
    ("fahren", "to drive"),
    ("essen", "to eat"),
    ("trinken", "to drink"),
    ("schlafen", "to sleep"),
    ("arbeiten", "to work"),
    ("wohnen", "to live"),
    ("lernen", "to learn"),
    ("lesen", "to read"),
    ("schreiben", "to write"),
    ("sprechen", "to speak"),
    ("hören", "to hear"),
    ("sehen", "to see"),
    ("kaufen", "to buy"),
    ("bezahlen", "to pay"),
    ("kochen", "to cook"),
    ("spielen", "to play"),
    ("machen", "to do"),
    ("haben", "to have"),
    ("sein", "to be"),
    ("geben", "to give"),
    ("nehmen", "to take"),
    ("finden", "to find"),
    ("fragen", "to ask"),
    ("antworten", "to answer"),
    ("helfen", "to help"),
    ("warten", "to wait"),
    ("öffnen", "to open"),
    ("schließen", "to close"),
    ("beginnen", "to begin"),
    ("bleiben", "to stay"),
    ("brauchen", "to need"),
    ("kennen", "to know (someone)"),
    ("wissen", "to know (a fact)"),
    ("verstehen", "to understand"),
    ("suchen", "to look for"),
    ("zeigen", "to show"),
    ("tanzen", "to dance"),
    ("singen", "to sing"),
    // 160..200
    ("groß", "big"),
    ("klein", "small"),
    ("alt", "old"),
    ("neu", "new"),
    ("jung", "young"),
    ("gut", "good"),
    ("schlecht", "bad"),
    ("schön", "beautiful"),
    ("teuer", "expensive"),
    ("billig", "cheap"),
    ("warm", "warm"),
    ("kalt", "cold"),
    ("heiß", "hot"),
    ("schnell", "fast"),
    ("langsam", "slow"),
    ("lang", "long"),
    ("kurz", "short"),
    ("leicht", "easy"),
    ("schwer", "difficult"),
    ("richtig", "correct"),
    ("falsch", "wrong"),
    ("voll", "full"),
    ("leer", "empty"),
    ("offen", "open"),
    ("geschlossen", "closed"),
    ("laut", "loud"),
    ("leise", "quiet"),
    ("früh", "early"),
    ("spät", "late"),
    ("nah", "near"),
    ("weit", "far"),
    ("müde", "tired"),
    ("krank", "ill"),
    ("gesund", "healthy"),
    ("froh", "glad"),
    ("traurig", "sad"),
    ("hungrig", "hungry"),
    ("durstig", "thirsty"),
    ("frei", "free"),
    ("besetzt", "occupied"),
    // 200..240
    ("die Farbe", "the colour"),
    ("rot", "red"),
    ("blau", "blue"),
    ("grün", "green"),
    ("gelb", "yellow"),
    ("schwarz", "black"),
    ("weiß", "white"),
    ("eins", "one"),
    ("zwei", "two"),
    ("drei", "three"),
    ("vier", "four"),
    ("fünf", "five"),
    ("zehn", "ten"),
    ("hundert", "hundred"),
    ("der Name", "the name"),
    ("die Adresse", "the address"),
    ("die Telefonnummer", "the phone number"),
    ("das Land", "the country"),
    ("die Sprache", "the language"),
    ("die Frage", "the question"),
    ("die Antwort", "the answer"),
    ("das Wort", "the word"),
    ("der Satz", "the sentence"),
    ("die Hausaufgabe", "the homework"),
    ("der Arbeitsplatz", "the workplace"),
    ("der Garten", "the garden"),
    ("der Park", "the park"),
    ("der Baum", "the tree"),
    ("die Blume", "the flower"),
    ("der Berg", "the mountain"),
    ("das Meer", "the sea"),
    ("der See", "the lake"),
    ("der Fluss", "the river"),
    ("das Kino", "the cinema"),
    ("das Museum", "the museum"),
    ("die Musik", "the music"),
    ("der Sport", "the sport"),
    ("das Spiel", "the game"),
    ("die Party", "the party"),
    ("das Geschenk", "the present"),
];
