mod type_predicates;
