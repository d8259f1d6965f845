/**
 * SvdReco
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

#[cfg(test)]
mod tests {

    use evaluation;
    use types::Observation;
    use {RatingModel, TermDocumentMatrix};

    #[test]
    fn programmatic_usage() {

        /* Our input data comprises of observed ratings of items by users. The identifiers can
           be of any hashable type, here we use strings. */
        let ratings = vec![
            Observation::new(String::from("alice"), String::from("apple"), 5.0),
            Observation::new(String::from("alice"), String::from("dog"), 2.0),
            Observation::new(String::from("alice"), String::from("pony"), 4.0),
            Observation::new(String::from("bob"), String::from("apple"), 4.0),
            Observation::new(String::from("bob"), String::from("pony"), 5.0),
            Observation::new(String::from("charles"), String::from("pony"), 2.0),
            Observation::new(String::from("charles"), String::from("bike"), 5.0),
            Observation::new(String::from("charles"), String::from("dog"), 4.0),
        ];

        /* We fit the model once: the ratings are arranged in a dense user x item matrix, missing
           ratings are imputed with the item mean and the centered matrix is factorized. */
        let model = RatingModel::fit(&ratings).unwrap();

        println!(
            "Found {} ratings between {} users and {} items.",
            model.data_dict().num_observations(),
            model.data_dict().num_users(),
            model.data_dict().num_items(),
        );

        /* Held-out ratings may refer to items we have never seen, these are predicted with the
           mean of the user's predicted ratings. */
        let held_out = vec![
            Observation::new(String::from("bob"), String::from("dog"), 2.0),
            Observation::new(String::from("charles"), String::from("apple"), 3.0),
            Observation::new(String::from("alice"), String::from("kite"), 4.0),
        ];

        /* We look at the prediction error for every rank the model supports. */
        let ranks: Vec<usize> = (1..=model.max_rank()).collect();
        let errors = evaluation::sweep(
            &model,     // The fitted model
            &held_out,  // The held-out ratings to predict
            &ranks,     // The truncation ranks to evaluate
            2,          // The number of threads to use for the sweep
        ).unwrap();

        assert_eq!(errors.len(), ranks.len());

        for rank_error in errors.iter() {
            println!("Rank {}: RMSE {:.4}", rank_error.rank, rank_error.rmse);
            assert!(rank_error.rmse.is_finite());
        }

        /* The same factorization gives us latent topics for a collection of documents. */
        let documents = vec![
            "the borrow checker rejects my rust code",
            "rust lifetimes and the borrow checker",
            "planting tulips and roses in the garden",
            "the roses in my garden need water",
        ];

        let term_document_matrix = TermDocumentMatrix::from_documents(&documents);
        let topics = term_document_matrix.topics(2, 3).unwrap();

        for topic in topics.iter() {
            println!("Topic {}: {}", topic.topic, topic.label());
        }

        assert_eq!(topics.len(), 2);
    }
}
